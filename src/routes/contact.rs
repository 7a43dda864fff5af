use std::fmt::Debug;

use actix_web::{
    error::JsonPayloadError, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError,
};
use anyhow::Context;
use sqlx::SqlitePool;

use crate::{domain::NewLead, util::error_chain_fmt};

/// `POST /contact`的请求体
/// 字段缺失由[`NewLead`]校验，而不是由反序列化拒绝
#[derive(serde::Deserialize)]
pub struct ContactData {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(serde::Serialize)]
struct ContactResponse {
    status: &'static str,
}

/// 非JSON请求体同样以`{"status":"error"}`响应
pub fn contact_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|e: JsonPayloadError, _req: &HttpRequest| ContactError::InvalidPayload(e).into())
}

#[tracing::instrument(
    name = "Saving a new lead",
    skip(body, pool),
    fields(lead_name = tracing::field::Empty, lead_id = tracing::field::Empty)
)]
pub async fn contact(
    body: web::Json<ContactData>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ContactError> {
    let lead: NewLead = body.0.try_into().map_err(ContactError::ValidationError)?;
    tracing::Span::current().record("lead_name", tracing::field::display(lead.name.as_ref()));

    let lead_id = insert_lead(&pool, &lead)
        .await
        .context("failed to insert a new lead.")?;
    tracing::Span::current().record("lead_id", lead_id);
    tracing::info!("lead saved.");

    Ok(HttpResponse::Ok().json(ContactResponse { status: "success" }))
}

#[tracing::instrument(skip_all)]
pub async fn insert_lead(pool: &SqlitePool, lead: &NewLead) -> sqlx::Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO leads (name, phone, message)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(lead.name.as_ref())
    .bind(lead.phone.as_ref())
    .bind(lead.message.as_ref())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("invalid contact payload.")]
    InvalidPayload(#[source] JsonPayloadError),
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::InvalidPayload(_) | ContactError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ContactResponse { status: "error" })
    }
}
