use super::ContactSubmission;

/// 提交事件，处理器总会先阻止其默认行为
pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

/// 含`name`、`phone`、`message`三个字段的表单
pub trait ContactForm {
    fn read(&self) -> ContactSubmission;

    /// 清空三个字段
    fn reset(&mut self);
}

/// 阻塞式提示框
pub trait Alerter {
    fn alert(&mut self, message: &str);
}

/// 默认隐藏的链接容器
pub trait LinkBox {
    fn set_href(&mut self, href: &str);

    fn show(&mut self);
}
