use std::future::{ready, Ready};

use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::{dev::Payload, FromRequest, HttpRequest};

/// 对`Session`的类型化封装，统一会话键名
pub struct TypedSession(Session);

impl TypedSession {
    const ADMIN_LOGGED_IN_KEY: &'static str = "admin_logged_in";

    pub fn renew(&self) {
        self.0.renew();
    }

    pub fn log_in_admin(&self) -> Result<(), SessionInsertError> {
        self.0.insert(Self::ADMIN_LOGGED_IN_KEY, true)
    }

    pub fn is_admin(&self) -> Result<bool, SessionGetError> {
        Ok(self
            .0
            .get::<bool>(Self::ADMIN_LOGGED_IN_KEY)?
            .unwrap_or(false))
    }

    pub fn log_out(self) {
        self.0.purge();
    }
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
