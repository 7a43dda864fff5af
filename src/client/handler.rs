use super::{
    Alerter, ContactForm, ContactTransport, ResponsePolicy, SubmitError, SubmitEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    SuccessRendered,
    FailureAlerted,
}

/// 绑定到单个表单的提交处理器
///
/// 每次提交：阻止默认行为、读取字段、发送一次请求、按策略渲染结果。
/// 不重试，网络或解析失败以[`SubmitError`]返回，视图保持不变。
pub struct FormSubmissionHandler<T, F, A, P> {
    transport: T,
    form: F,
    alerter: A,
    policy: P,
}

impl<T, F, A, P> FormSubmissionHandler<T, F, A, P>
where
    T: ContactTransport,
    F: ContactForm,
    A: Alerter,
    P: ResponsePolicy,
{
    pub fn new(transport: T, form: F, alerter: A, policy: P) -> Self {
        Self {
            transport,
            form,
            alerter,
            policy,
        }
    }

    #[tracing::instrument(name = "Submitting contact form", skip_all)]
    pub async fn on_submit<E: SubmitEvent>(
        &mut self,
        event: &mut E,
    ) -> Result<SubmitOutcome, SubmitError> {
        event.prevent_default();

        let submission = self.form.read();
        let result = self.transport.post_contact(&submission).await?;

        if self.policy.accepts(&result) {
            self.policy
                .on_success(&submission, &result, &mut self.form, &mut self.alerter);
            Ok(SubmitOutcome::SuccessRendered)
        } else {
            self.policy
                .on_failure(&result, &mut self.form, &mut self.alerter);
            Ok(SubmitOutcome::FailureAlerted)
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn alerter(&self) -> &A {
        &self.alerter
    }

    pub fn alerter_mut(&mut self) -> &mut A {
        &mut self.alerter
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}
