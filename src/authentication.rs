mod middleware;
mod password;

pub use middleware::reject_anonymous_user;
pub use password::{validate_credential, AdminCredential, AuthError, Credential};
