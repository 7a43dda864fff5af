use actix_web::{http::header::ContentType, HttpResponse, Responder};

/// 静态表单页面，元素id与`client`中的视图约定一致，页面本身不绑定提交处理
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("home/index.html"))
}
