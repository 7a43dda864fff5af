use actix_web::cookie::Key;
use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::sqlite::SqliteConnectOptions;

#[derive(serde::Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    pub database: DBConfig,
    pub admin: AdminConfig,
    pub session: SessionConfig,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl WebConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct DBConfig {
    pub filename: String,
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

fn default_create_if_missing() -> bool {
    true
}

impl DBConfig {
    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.filename)
            .create_if_missing(self.create_if_missing)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: SecretString,
}

#[derive(serde::Deserialize, Clone)]
pub struct SessionConfig {
    pub secret_key: SecretString,
}

impl SessionConfig {
    /// 会话cookie与flash消息共用的签名密钥
    /// 密钥长度不足64字节时返回错误
    pub fn key(&self) -> Result<Key, anyhow::Error> {
        Key::try_from(self.secret_key.expose_secret().as_bytes())
            .map_err(|e| anyhow::anyhow!("session.secret_key is too short: {e}"))
    }
}

/// 读取`config.yaml`，并使用`APP_`前缀的环境变量覆盖
/// 管理员密码与会话密钥不写入`config.yaml`，缺失时启动失败
/// e.g. `APP_ADMIN__PASSWORD=... APP_SESSION__SECRET_KEY=...`
pub fn config() -> Result<Config, config::ConfigError> {
    config_with_overrides(std::iter::empty::<(&str, &str)>())
}

/// 在文件与环境变量之上覆盖指定的键，键名以`.`分隔，e.g. `admin.password`
pub fn config_with_overrides<'a>(
    overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
    for (key, value) in overrides {
        builder = builder.set_override(key, value)?;
    }

    builder.build()?.try_deserialize::<Config>()
}
