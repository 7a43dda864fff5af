//! 联系表单的提交处理
//!
//! [`FormSubmissionHandler`]拦截表单提交，将字段以JSON形式`POST /contact`，
//! 再交由[`ResponsePolicy`]渲染结果。
//! 表单、提示框与链接容器均通过构造函数注入。

mod handler;
mod headless;
mod policy;
mod submission;
mod transport;
mod view;
mod whatsapp;

pub use handler::{FormSubmissionHandler, SubmitOutcome};
pub use headless::{HeadlessAlerter, HeadlessForm, HeadlessLinkBox, HeadlessSubmitEvent};
pub use policy::{PlainAlertPolicy, ResponsePolicy, WhatsAppPolicy, GENERIC_FAILURE_MESSAGE};
pub use submission::{ContactSubmission, ServerResult};
pub use transport::{ContactClient, ContactTransport, SubmitError};
pub use view::{Alerter, ContactForm, LinkBox, SubmitEvent};
pub use whatsapp::{whatsapp_link, whatsapp_text, WHATSAPP_BASE_URL, WHATSAPP_NUMBER};
