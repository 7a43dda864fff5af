mod admin;
mod contact;
mod home;
mod login;

pub use admin::*;
pub use contact::*;
pub use home::*;
pub use login::*;

use actix_web::{HttpResponse, Responder};

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
}
