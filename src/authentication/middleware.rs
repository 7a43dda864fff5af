use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::InternalError,
    middleware::Next,
    FromRequest,
};

use crate::{
    session_state::TypedSession,
    util::{e500, see_other},
};

/// 未登录的请求重定向到登录页面
pub async fn reject_anonymous_user(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload)
    }
    .await?;

    if session.is_admin().map_err(e500)? {
        next.call(req).await
    } else {
        let e = anyhow::anyhow!("管理员未登录.");
        let res = see_other("/admin/login");
        Err(InternalError::from_response(e, res).into())
    }
}
