mod admin_dashboard;
mod client;
mod health_check;
mod login;
