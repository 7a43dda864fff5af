use super::ContactSubmission;

pub const WHATSAPP_NUMBER: &str = "7900331626";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// 预填到WhatsApp聊天框中的文本
pub fn whatsapp_text(submission: &ContactSubmission) -> String {
    format!(
        "Hello, I just sent a request through your website.\n\nName: {}\nPhone: {}\nMessage: {}",
        submission.name, submission.phone, submission.message
    )
}

/// `https://wa.me/<number>?text=<percent-encoded text>`
pub fn whatsapp_link(submission: &ContactSubmission) -> String {
    format!(
        "{WHATSAPP_BASE_URL}{WHATSAPP_NUMBER}?text={}",
        urlencoding::encode(&whatsapp_text(submission))
    )
}
