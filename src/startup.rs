use std::net::TcpListener;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, dev::Server, middleware::from_fn, web, App, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use sqlx::SqlitePool;
use tracing_actix_web::TracingLogger;

use crate::{
    authentication::{reject_anonymous_user, AdminCredential},
    routes,
};

pub fn run(
    listener: TcpListener,
    pool: web::Data<SqlitePool>,
    admin: web::Data<AdminCredential>,
    session_key: Key,
) -> Result<Server, std::io::Error> {
    // flash消息与会话共用同一密钥
    let message_store = CookieMessageStore::builder(session_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .app_data(admin.clone())
            .route("/", web::get().to(routes::home))
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::resource("/contact")
                    .app_data(routes::contact_json_config())
                    .route(web::post().to(routes::contact)),
            )
            .route("/admin/login", web::get().to(routes::login_form))
            .route("/admin/login", web::post().to(routes::login))
            .route("/admin/logout", web::get().to(routes::logout))
            .service(
                web::resource("/admin")
                    .wrap(from_fn(reject_anonymous_user))
                    .route(web::get().to(routes::admin_dashboard)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
