use anyhow::Context;
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use secrecy::{ExposeSecret, SecretString};

use crate::{config::AdminConfig, telemetry::spawn_blocking_with_tracing};

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid credential.")]
    InvalidCredential(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

pub struct Credential {
    pub username: String,
    pub password: SecretString,
}

/// 配置中的管理员账户
/// 启动时只保留密码的argon2哈希
pub struct AdminCredential {
    username: String,
    password_hash: SecretString,
}

impl AdminCredential {
    pub fn from_config(config: &AdminConfig) -> Result<Self, anyhow::Error> {
        let password_hash = compute_password_hash(config.password.clone())
            .context("failed to hash admin password.")?;

        Ok(Self {
            username: config.username.clone(),
            password_hash,
        })
    }
}

#[tracing::instrument(name = "Validate credential", skip(credential, admin))]
/// 校验管理员凭证
pub async fn validate_credential(
    credential: Credential,
    admin: &AdminCredential,
) -> Result<(), AuthError> {
    let username_matches = credential.username == admin.username;
    let expected_password_hash = admin.password_hash.clone();

    // 用户名不匹配时同样执行一次哈希校验，避免通过响应时间探测用户名
    let verified = spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_password_hash, credential.password)
    })
    .await
    .context("failed to spawn blocking task.")?;

    if !username_matches {
        return Err(AuthError::InvalidCredential(anyhow::anyhow!(
            "Unknown username."
        )));
    }
    verified
}

#[tracing::instrument(
    name = "Verify password hash",
    skip(expected_password_hash, password_candidate)
)]
/// 校验管理员密码
fn verify_password_hash(
    expected_password_hash: SecretString,
    password_candidate: SecretString,
) -> Result<(), AuthError> {
    let expected_password_hash = PasswordHash::new(expected_password_hash.expose_secret())
        .context("failed to parse hash in PHC string format.")?;

    Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_password_hash,
        )
        .context("Invalid password.")
        .map_err(AuthError::InvalidCredential)
}

fn compute_password_hash(password: SecretString) -> Result<SecretString, anyhow::Error> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let password_hash = Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)?
        .to_string();

    Ok(SecretString::from(password_hash))
}
