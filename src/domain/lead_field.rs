/// 字段缺失或为空字符串时返回错误
/// 仅含空白字符的值视为有效，不做修剪
fn parse_required(field: &str, value: Option<&str>) -> Result<String, String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.into()),
        Some(_) => Err(format!("`{field}` must not be empty.")),
        None => Err(format!("`{field}` is missing.")),
    }
}

#[derive(Debug)]
pub struct LeadName(String);

impl LeadName {
    pub fn parse(s: Option<&str>) -> Result<LeadName, String> {
        parse_required("name", s).map(Self)
    }
}

impl AsRef<str> for LeadName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub struct LeadPhone(String);

impl LeadPhone {
    pub fn parse(s: Option<&str>) -> Result<LeadPhone, String> {
        parse_required("phone", s).map(Self)
    }
}

impl AsRef<str> for LeadPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub struct LeadMessage(String);

impl LeadMessage {
    pub fn parse(s: Option<&str>) -> Result<LeadMessage, String> {
        parse_required("message", s).map(Self)
    }
}

impl AsRef<str> for LeadMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
