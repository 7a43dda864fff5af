use std::fmt::Write;

use actix_web::{http::header::ContentType, web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use sqlx::SqlitePool;

use crate::{
    domain::Lead,
    util::{e500, escape_html, format_flash_messages},
};

pub async fn admin_dashboard(
    pool: web::Data<SqlitePool>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let leads = all_leads(&pool).await.map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            include_str!("dashboard.html"),
            format_flash_messages(flash_messages),
            leads.len(),
            format_lead_rows(&leads),
        )))
}

/// 按创建时间倒序获取全部联系请求
#[tracing::instrument(skip_all)]
pub async fn all_leads(pool: &SqlitePool) -> sqlx::Result<Vec<Lead>> {
    sqlx::query_as::<_, Lead>(
        r#"
        SELECT id, name, phone, message, created_at
        FROM leads
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

fn format_lead_rows(leads: &[Lead]) -> String {
    let mut rows = String::new();
    for lead in leads {
        let created_at = lead
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        // 写入`String`不会失败
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            lead.id,
            escape_html(&lead.name),
            escape_html(&lead.phone),
            escape_html(&lead.message),
            created_at,
        );
    }
    rows
}
