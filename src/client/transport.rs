use std::{future::Future, time::Duration};

use anyhow::Context;

use super::{ContactSubmission, ServerResult};

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("failed to send contact request.")]
    Request(#[source] reqwest::Error),
    #[error("contact response is not valid JSON.")]
    Decode(#[source] serde_json::Error),
    #[error("contact response is null.")]
    NullBody,
}

/// 发送一次联系请求并解析响应体
pub trait ContactTransport {
    fn post_contact(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<ServerResult, SubmitError>> + Send;
}

pub struct ContactClient {
    client: reqwest::Client,
    contact_url: reqwest::Url,
}

impl ContactClient {
    /// `timeout`为`None`时一直等待响应
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, anyhow::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build contact client.")?;
        let contact_url = reqwest::Url::parse(base_url)
            .and_then(|url| url.join("/contact"))
            .with_context(|| format!("failed to parse base url `{base_url}`."))?;

        Ok(Self {
            client,
            contact_url,
        })
    }
}

impl ContactTransport for ContactClient {
    #[tracing::instrument(name = "posting contact request", skip_all, fields(url = %self.contact_url))]
    async fn post_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ServerResult, SubmitError> {
        // 不检查HTTP状态码，4xx/5xx的响应体同样交给响应策略处理
        let body = self
            .client
            .post(self.contact_url.clone())
            .json(submission)
            .send()
            .await
            .map_err(SubmitError::Request)?
            .bytes()
            .await
            .map_err(SubmitError::Request)?;

        ServerResult::parse(&body)
    }
}
