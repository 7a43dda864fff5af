use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;

use crate::{session_state::TypedSession, util::see_other};

pub async fn logout(session: TypedSession) -> HttpResponse {
    session.log_out();
    FlashMessage::info("Logged out.").send();
    see_other("/admin/login")
}
