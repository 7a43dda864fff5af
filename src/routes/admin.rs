mod dashboard;
mod logout;

pub use dashboard::admin_dashboard;
pub use logout::logout;
