//! 不依赖浏览器的视图实现，记录所有视图变更，便于测试与脚本化提交

use super::{Alerter, ContactForm, ContactSubmission, LinkBox, SubmitEvent};

#[derive(Debug, Default)]
pub struct HeadlessSubmitEvent {
    default_prevented: bool,
}

impl HeadlessSubmitEvent {
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl SubmitEvent for HeadlessSubmitEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadlessForm {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl HeadlessForm {
    pub fn new(name: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.message.is_empty()
    }
}

impl ContactForm for HeadlessForm {
    fn read(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.message.clear();
    }
}

#[derive(Debug, Default)]
pub struct HeadlessAlerter {
    messages: Vec<String>,
}

impl HeadlessAlerter {
    /// 取出并清空已记录的提示
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Alerter for HeadlessAlerter {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.into());
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadlessLinkBox {
    pub href: Option<String>,
    pub visible: bool,
}

impl LinkBox for HeadlessLinkBox {
    fn set_href(&mut self, href: &str) {
        self.href = Some(href.into());
    }

    fn show(&mut self) {
        self.visible = true;
    }
}
