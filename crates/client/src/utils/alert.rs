use gloo::dialogs::alert as browser_alert;
use shared::error::FormError;

/// Blocking modal with a title line and a message
pub fn alert(title: &str, message: &str) {
    browser_alert(&format!("{title}\n\n{message}"));
}

pub fn alert_form_error(err: &FormError) {
    alert(err.title(), &err.message());
}
