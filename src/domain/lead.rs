use sqlx::types::chrono::NaiveDateTime;

use crate::routes::ContactData;

use super::{LeadMessage, LeadName, LeadPhone};

/// 待写入`leads`表的联系请求
#[derive(Debug)]
pub struct NewLead {
    pub name: LeadName,
    pub phone: LeadPhone,
    pub message: LeadMessage,
}

impl TryFrom<ContactData> for NewLead {
    type Error = String;

    fn try_from(data: ContactData) -> Result<Self, Self::Error> {
        let name = LeadName::parse(data.name.as_deref())?;
        let phone = LeadPhone::parse(data.phone.as_deref())?;
        let message = LeadMessage::parse(data.message.as_deref())?;

        Ok(Self {
            name,
            phone,
            message,
        })
    }
}

/// 已存储的联系请求
#[derive(Debug, sqlx::FromRow)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub created_at: Option<NaiveDateTime>,
}
