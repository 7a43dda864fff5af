use serde_json::Value;

use super::SubmitError;

/// 一次提交中读取到的表单字段，原样发送，不做校验或修剪
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub message: String,
}

/// `/contact`响应体
/// 形状由服务端决定，客户端只按属性读取`status`与`message`，
/// 非对象的JSON值（数组、字符串、数字等）视为两者都不存在
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerResult {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl ServerResult {
    /// 解析响应体
    /// 非法JSON返回[`SubmitError::Decode`]，顶层`null`无法读取属性，返回[`SubmitError::NullBody`]
    pub fn parse(body: &[u8]) -> Result<Self, SubmitError> {
        let value: Value = serde_json::from_slice(body).map_err(SubmitError::Decode)?;
        if value.is_null() {
            return Err(SubmitError::NullBody);
        }
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        Self {
            status: value
                .get("status")
                .and_then(Value::as_str)
                .map(Into::into),
            message: value.get("message").map(display_text),
        }
    }

    /// 只有字符串`"success"`才算成功
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// 提示框中显示的`message`
    /// 字段缺失时显示`undefined`，与浏览器中`alert(undefined)`一致
    pub fn alert_text(&self) -> &str {
        self.message.as_deref().unwrap_or("undefined")
    }
}

/// JSON值转换为提示框文本，规则同浏览器的字符串转换
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => display_text(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".into(),
    }
}
