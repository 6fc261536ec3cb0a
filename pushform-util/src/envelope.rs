use serde_json::Value;

/// Value of the `status` field that marks a successful submission.
pub const STATUS_SUCCESS: &str = "success";

/// JSON envelope returned by the form endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: Option<String>,
    pub message: Option<String>,
    /// The whole parsed body, handed to success callbacks.
    pub data: Value,
}

impl Envelope {
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let data: Value = serde_json::from_slice(body)?;
        let status = data.get("status").and_then(Value::as_str).map(str::to_string);
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(Self {
            status,
            message,
            data,
        })
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let envelope = Envelope::parse(br#"{"status":"success","id":7}"#).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data["id"], 7);
    }

    #[test]
    fn test_failure_envelope_with_message() {
        let envelope = Envelope::parse(br#"{"status":"error","message":"Duplicate email"}"#).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.message.as_deref(), Some("Duplicate email"));
    }

    #[test]
    fn test_missing_or_odd_status() {
        assert!(!Envelope::parse(b"{}").unwrap().is_success());
        assert!(!Envelope::parse(br#"{"status":true}"#).unwrap().is_success());
        assert!(!Envelope::parse(br#"["success"]"#).unwrap().is_success());
        assert_eq!(Envelope::parse(br#"{"message":""}"#).unwrap().message, None);
    }

    #[test]
    fn test_invalid_json() {
        assert!(Envelope::parse(b"not json").is_err());
        assert!(Envelope::parse(b"").is_err());
    }
}
