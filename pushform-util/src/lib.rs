pub mod envelope;
pub mod error_codes;
pub mod form;
pub mod input;

pub use envelope::{Envelope, STATUS_SUCCESS};
pub use error_codes::{DEFAULT_ERROR_MESSAGE, message_for};
pub use form::{Field, FieldKind, FieldValue, Form, SubmitControl};
pub use pushform_config::Position;

use pushform_config::{ConfigError, ToastConfig};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

/// Class added to toasts reporting a failure.
pub const ERROR_CLASS: &str = "error";

/// Class added to toasts reporting a success.
pub const SUCCESS_CLASS: &str = "success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Options for a single toast.
///
/// The JSON form uses the camelCase keys of the page scripts, so an options
/// object written for the browser deserializes unchanged. Unknown keys are
/// ignored, an unknown `position` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationOptions {
    pub title: String,
    pub message: String,
    /// Entry/exit transition duration in milliseconds (default 250).
    #[serde(rename = "animationTime")]
    pub animation_time_ms: u64,
    /// Visible duration before auto-dismiss in milliseconds (default 3000).
    #[serde(rename = "activeTime")]
    pub active_time_ms: u64,
    /// Render the shrinking progress bar (default true).
    pub show_indicator: bool,
    /// Extra styling class, e.g. `error` (default empty).
    pub additional_class: String,
    /// Default `bottom-right`.
    pub position: Position,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self::from_config(&ToastConfig::default())
    }
}

impl NotificationOptions {
    pub fn from_config(config: &ToastConfig) -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            animation_time_ms: config.animation_time_ms,
            active_time_ms: config.active_time_ms,
            show_indicator: config.show_indicator,
            additional_class: String::new(),
            position: config.position,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn animation_time(mut self, time: Duration) -> Self {
        self.animation_time_ms = time.as_millis() as u64;
        self
    }

    pub fn active_time(mut self, time: Duration) -> Self {
        self.active_time_ms = time.as_millis() as u64;
        self
    }

    pub fn show_indicator(mut self, show: bool) -> Self {
        self.show_indicator = show;
        self
    }

    pub fn additional_class(mut self, class: impl Into<String>) -> Self {
        self.additional_class = class.into();
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_time_ms)
    }

    pub fn active_duration(&self) -> Duration {
        Duration::from_millis(self.active_time_ms)
    }

    /// Deadline of the redundant dismiss timer.
    pub fn safety_deadline(&self) -> Duration {
        self.active_duration() + self.animation_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_defaults() {
        let options = NotificationOptions::default();
        assert_eq!(options.title, "");
        assert_eq!(options.message, "");
        assert_eq!(options.animation_time_ms, 250);
        assert_eq!(options.active_time_ms, 3000);
        assert!(options.show_indicator);
        assert_eq!(options.additional_class, "");
        assert_eq!(options.position, Position::BottomRight);
        assert_eq!(options.safety_deadline(), Duration::from_millis(3250));
    }

    #[test]
    fn test_options_from_script_object() {
        let options = NotificationOptions::from_json_str(
            r#"{
                "title": "Hello",
                "message": "Fill in the form",
                "activeTime": 5000,
                "showIndicator": false,
                "additionalClass": "error",
                "position": "top-center",
                "type": "error"
            }"#,
        )
        .unwrap();

        assert_eq!(options.title, "Hello");
        assert_eq!(options.active_time_ms, 5000);
        assert_eq!(options.animation_time_ms, 250);
        assert!(!options.show_indicator);
        assert_eq!(options.additional_class, ERROR_CLASS);
        assert_eq!(options.position, Position::TopCenter);
    }

    #[test]
    fn test_unknown_position_fails_loudly() {
        let err = NotificationOptions::from_json_str(r#"{"position": "middle-left"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_config() {
        let config = ToastConfig {
            position: Position::TopLeft,
            active_time_ms: 1000,
            show_indicator: false,
            ..Default::default()
        };
        let options = NotificationOptions::from_config(&config).title("Saved");
        assert_eq!(options.position, Position::TopLeft);
        assert_eq!(options.active_duration(), Duration::from_secs(1));
        assert!(!options.show_indicator);
        assert_eq!(options.title, "Saved");
    }

    #[test]
    fn test_notification_id_display() {
        assert_eq!(NotificationId(42).to_string(), "#42");
    }
}
