mod authentication;
pub mod client;
pub mod config;
mod domain;
mod routes;
mod session_state;
mod startup;
pub mod telemetry;
mod util;

pub use authentication::AdminCredential;
pub use startup::run;
