use super::{whatsapp_link, Alerter, ContactForm, ContactSubmission, LinkBox, ServerResult};

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// 响应处理策略：成功时的动作与失败时的动作
pub trait ResponsePolicy {
    /// 结果是否交给[`ResponsePolicy::on_success`]处理
    fn accepts(&self, result: &ServerResult) -> bool;

    fn on_success<F, A>(
        &mut self,
        submission: &ContactSubmission,
        result: &ServerResult,
        form: &mut F,
        alerter: &mut A,
    ) where
        F: ContactForm,
        A: Alerter;

    fn on_failure<F, A>(&mut self, result: &ServerResult, form: &mut F, alerter: &mut A)
    where
        F: ContactForm,
        A: Alerter;
}

/// 成功时生成WhatsApp链接并显示链接容器，清空表单
/// 其余任何状态只提示一条通用错误，保留表单内容
pub struct WhatsAppPolicy<L> {
    link_box: L,
}

impl<L: LinkBox> WhatsAppPolicy<L> {
    pub fn new(link_box: L) -> Self {
        Self { link_box }
    }

    pub fn link_box(&self) -> &L {
        &self.link_box
    }
}

impl<L: LinkBox> ResponsePolicy for WhatsAppPolicy<L> {
    fn accepts(&self, result: &ServerResult) -> bool {
        result.is_success()
    }

    fn on_success<F, A>(
        &mut self,
        submission: &ContactSubmission,
        _result: &ServerResult,
        form: &mut F,
        _alerter: &mut A,
    ) where
        F: ContactForm,
        A: Alerter,
    {
        self.link_box.set_href(&whatsapp_link(submission));
        self.link_box.show();
        form.reset();
    }

    fn on_failure<F, A>(&mut self, result: &ServerResult, _form: &mut F, alerter: &mut A)
    where
        F: ContactForm,
        A: Alerter,
    {
        tracing::warn!(status = ?result.status, "contact request was not accepted.");
        alerter.alert(GENERIC_FAILURE_MESSAGE);
    }
}

/// 不区分状态，直接提示服务端返回的`message`
/// `message`缺失时提示`undefined`，为`null`时提示`null`
#[derive(Debug, Default)]
pub struct PlainAlertPolicy;

impl ResponsePolicy for PlainAlertPolicy {
    fn accepts(&self, _result: &ServerResult) -> bool {
        true
    }

    fn on_success<F, A>(
        &mut self,
        _submission: &ContactSubmission,
        result: &ServerResult,
        _form: &mut F,
        alerter: &mut A,
    ) where
        F: ContactForm,
        A: Alerter,
    {
        alerter.alert(result.alert_text());
    }

    fn on_failure<F, A>(&mut self, result: &ServerResult, _form: &mut F, alerter: &mut A)
    where
        F: ContactForm,
        A: Alerter,
    {
        alerter.alert(result.alert_text());
    }
}
