use actix_web::{
    http::header::{CacheControl, CacheDirective, ContentType},
    HttpResponse,
};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::util::format_flash_messages;

/// 登录失败或注销后的flash消息只显示一次，页面不允许缓存
pub async fn login_form(flash_messages: IncomingFlashMessages) -> HttpResponse {
    let messages_html = format_flash_messages(flash_messages);

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .body(format!(include_str!("login.html"), messages_html))
}
