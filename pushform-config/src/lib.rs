use std::{fmt, path::Path, str::FromStr};

/// Screen anchor of a notification container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    TopCenter,
    BottomCenter,
}

impl Position {
    /// Every anchor, in the order the containers are appended to the page.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::TopCenter,
        Position::BottomCenter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::TopCenter => "top-center",
            Position::BottomCenter => "bottom-center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPosition(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown notification position `{0}`")]
    UnknownPosition(String),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Defaults applied to every toast unless the caller overrides them.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToastConfig {
    pub position: Position,
    /// Entry/exit transition duration in milliseconds.
    pub animation_time_ms: u64,
    /// Time in milliseconds a toast stays visible before it is dismissed.
    pub active_time_ms: u64,
    /// Whether toasts render a shrinking progress indicator.
    pub show_indicator: bool,
    /// Interval between indicator frames in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            animation_time_ms: 250,
            active_time_ms: 3000,
            show_indicator: true,
            frame_interval_ms: 16,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SubmitConfig {
    /// Max time in milliseconds a submission may wait for the server.
    pub timeout_ms: u64,
    /// Used as the request URL when a form declares no action.
    pub page_url: Option<String>,
    pub success_title: String,
    pub success_message: String,
    pub error_title: String,
    /// Shown for status codes missing from the error table.
    pub fallback_error_message: String,
    pub validation_message: String,
    pub timeout_message: String,
    pub invalid_json_message: String,
    pub server_error_message: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            page_url: None,
            success_title: "Success".to_string(),
            success_message: "The form was submitted successfully.".to_string(),
            error_title: "Error".to_string(),
            fallback_error_message: "Failed to submit the form.".to_string(),
            validation_message: "Please fill in all required fields.".to_string(),
            timeout_message: "The request timed out. Please try again.".to_string(),
            invalid_json_message: "The server response is not valid JSON.".to_string(),
            server_error_message: "Server error.".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedbackConfig {
    pub toast: ToastConfig,
    pub submit: SubmitConfig,
}

impl FeedbackConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toast.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid("toast.frame_interval_ms must be positive"));
        }
        if self.submit.timeout_ms == 0 {
            return Err(ConfigError::Invalid("submit.timeout_ms must be positive"));
        }
        Ok(())
    }
}
