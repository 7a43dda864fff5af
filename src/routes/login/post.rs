use std::fmt::Debug;

use actix_web::{body::BoxBody, web, HttpResponse, Responder, ResponseError};
use actix_web_flash_messages::FlashMessage;
use secrecy::SecretString;

use crate::{
    authentication::{validate_credential, AdminCredential, AuthError, Credential},
    session_state::TypedSession,
    util::{error_chain_fmt, see_other},
};

#[derive(serde::Deserialize)]
pub struct FormData {
    username: String,
    password: SecretString,
}

#[tracing::instrument(skip_all, fields(username = tracing::field::Empty))]
pub async fn login(
    form: web::Form<FormData>,
    admin: web::Data<AdminCredential>,
    session: TypedSession,
) -> Result<impl Responder, LoginError> {
    let credential = Credential {
        username: form.0.username,
        password: form.0.password,
    };
    tracing::Span::current().record("username", tracing::field::display(&credential.username));

    validate_credential(credential, &admin)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredential(_) => LoginError::AuthError(e.into()),
            AuthError::UnexpectedError(_) => LoginError::UnexpectedError(e.into()),
        })?;

    session.renew();
    session
        .log_in_admin()
        .map_err(|e| LoginError::UnexpectedError(e.into()))?;

    Ok(see_other("/admin"))
}

#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    AuthError(#[source] anyhow::Error),
    #[error("Something went wrong.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for LoginError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        FlashMessage::error(self.to_string()).send();
        see_other("/admin/login")
    }
}
