//! User-facing feedback for form submissions.

use crate::center::NotificationCenter;
use pushform_config::SubmitConfig;
use pushform_util::{ERROR_CLASS, NotificationId, SUCCESS_CLASS, error_codes};
use std::sync::Arc;
use tracing::warn;

/// Last-resort output used when no notification center is available.
///
/// On a page this is a blocking alert box.
pub trait Alert: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

/// Alert sink that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlert;

impl Alert for LogAlert {
    fn alert(&self, title: &str, message: &str) {
        tracing::error!(title, text = message, "alert");
    }
}

/// Routes messages to the notification center, or to the alert sink
#[derive(Clone)]
pub struct Feedback {
    center: Option<NotificationCenter>,
    alert: Arc<dyn Alert>,
    error_title: String,
}

impl std::fmt::Debug for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feedback")
            .field("center", &self.center)
            .field("error_title", &self.error_title)
            .finish_non_exhaustive()
    }
}

impl Feedback {
    pub fn new(center: Option<NotificationCenter>, config: &SubmitConfig) -> Self {
        Self {
            center,
            alert: Arc::new(LogAlert),
            error_title: config.error_title.clone(),
        }
    }

    pub fn with_alert(mut self, alert: Arc<dyn Alert>) -> Self {
        self.alert = alert;
        self
    }

    pub fn center(&self) -> Option<&NotificationCenter> {
        self.center.as_ref()
    }

    /// Show the table message for `code`, else `fallback`.
    pub fn notify_error_by_code(&self, code: u16, fallback: &str) -> Option<NotificationId> {
        let message = error_codes::message_for(code, Some(fallback));
        warn!(code, text = message, "notification");
        self.show(&self.error_title, message, ERROR_CLASS)
    }

    /// Show an error with a caller-provided message.
    pub fn notify_error(&self, message: &str) -> Option<NotificationId> {
        warn!(text = message, "notification");
        self.show(&self.error_title, message, ERROR_CLASS)
    }

    pub fn show_notification(&self, title: &str, message: &str, is_error: bool) -> Option<NotificationId> {
        let class = if is_error { ERROR_CLASS } else { SUCCESS_CLASS };
        self.show(title, message, class)
    }

    fn show(&self, title: &str, message: &str, class: &str) -> Option<NotificationId> {
        match &self.center {
            Some(center) => Some(
                center.create_notification(
                    center
                        .options()
                        .title(title)
                        .message(message)
                        .additional_class(class),
                ),
            ),
            None => {
                warn!(title, text = message, "notification center unavailable");
                self.alert.alert(title, message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushform_config::ToastConfig;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingAlert(Mutex<Vec<(String, String)>>);

    impl Alert for RecordingAlert {
        fn alert(&self, title: &str, message: &str) {
            self.0.lock().unwrap().push((title.to_string(), message.to_string()));
        }
    }

    fn feedback() -> (Feedback, NotificationCenter) {
        let center = NotificationCenter::new(ToastConfig::default()).unwrap();
        (Feedback::new(Some(center.clone()), &SubmitConfig::default()), center)
    }

    #[tokio::test(start_paused = true)]
    async fn test_known_code_uses_table() {
        let (feedback, center) = feedback();
        let id = feedback.notify_error_by_code(404, "ignored").unwrap();

        let card = center.card(id).unwrap();
        assert_eq!(card.title, "Error");
        assert_eq!(card.message, error_codes::message(404).unwrap());
        assert!(card.has_class("error"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_code_uses_fallback() {
        let (feedback, center) = feedback();
        let id = feedback.notify_error_by_code(499, "Client closed request").unwrap();
        assert_eq!(center.card(id).unwrap().message, "Client closed request");

        let id = feedback.notify_error_by_code(499, "").unwrap();
        assert_eq!(center.card(id).unwrap().message, error_codes::DEFAULT_ERROR_MESSAGE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_notification_classes() {
        let (feedback, center) = feedback();
        let ok = feedback.show_notification("Success", "Sent", false).unwrap();
        let err = feedback.show_notification("Oops", "Failed", true).unwrap();

        assert!(center.card(ok).unwrap().has_class("success"));
        assert!(center.card(err).unwrap().has_class("error"));
    }

    #[test]
    fn test_without_center_falls_back_to_alert() {
        let alert = Arc::new(RecordingAlert::default());
        let feedback = Feedback::new(None, &SubmitConfig::default()).with_alert(alert.clone());

        assert!(feedback.notify_error_by_code(500, "unused").is_none());
        assert!(feedback.show_notification("Success", "Sent", false).is_none());

        let alerts = alert.0.lock().unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0], ("Error".to_string(), error_codes::message(500).unwrap().to_string()));
        assert_eq!(alerts[1], ("Success".to_string(), "Sent".to_string()));
    }
}
