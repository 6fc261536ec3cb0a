//! Asynchronous form submission.
//!
//! A submission validates the form, disables its submit control, posts the
//! fields with a deadline and turns whatever happens into exactly one
//! notification. The control is enabled again on every exit path.

use crate::feedback::Feedback;
use crate::transport::{FormRequest, HttpResponse, Transport};
use pushform_config::SubmitConfig;
use pushform_util::{Envelope, Form, SubmitControl, error_codes};
use serde_json::Value;
use std::{fmt, sync::Arc, time::Duration};
use tracing::{debug, error, warn};

/// Callback run with the response body after a successful submission
pub type SuccessCallback = Box<dyn FnOnce(&Value) + Send>;

/// Dismisses overlays by element id
pub trait Overlays: Send + Sync {
    fn toggle(&self, id: &str);
}

/// Why a request failed below the application level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The server answered with a non-2xx status
    Status(u16),
    /// The body of a 2xx response was not JSON
    MalformedBody,
    /// The request did not complete
    Network,
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ValidationFailed { missing: Vec<String> },
    Success,
    ServerFailure { message: String },
    TransportFailure(Failure),
    TimedOut,
}

/// Submissions refused before anything is changed or sent
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("the form has no submit control")]
    MissingSubmitControl,
    #[error("the form has no action and no page URL is configured")]
    MissingAction,
    /// The submit control is held by a request still in flight
    #[error("the form is already being submitted")]
    InFlight,
}

/// Per-call submission settings
pub struct Submission {
    is_popup: bool,
    timeout: Duration,
    on_success: Option<SuccessCallback>,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            is_popup: false,
            timeout: Duration::from_millis(SubmitConfig::default().timeout_ms),
            on_success: None,
        }
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("is_popup", &self.is_popup)
            .field("timeout", &self.timeout)
            .field("on_success", &self.on_success.is_some())
            .finish()
    }
}

impl Submission {
    /// Dismiss the enclosing overlay on success
    pub fn popup(mut self, is_popup: bool) -> Self {
        self.is_popup = is_popup;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run `callback` instead of showing the success notification
    pub fn on_success(mut self, callback: impl FnOnce(&Value) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }
}

/// Keeps the submit control disabled while alive
struct Disabled<'a>(&'a SubmitControl);

impl<'a> Disabled<'a> {
    fn new(control: &'a SubmitControl) -> Self {
        control.set_disabled(true);
        Self(control)
    }
}

impl Drop for Disabled<'_> {
    fn drop(&mut self) {
        self.0.set_disabled(false);
    }
}

pub struct FormSubmitter<T> {
    transport: T,
    feedback: Feedback,
    config: SubmitConfig,
    overlays: Option<Arc<dyn Overlays>>,
}

impl<T: Transport> FormSubmitter<T> {
    pub fn new(transport: T, feedback: Feedback, config: SubmitConfig) -> Self {
        Self {
            transport,
            feedback,
            config,
            overlays: None,
        }
    }

    pub fn with_overlays(mut self, overlays: Arc<dyn Overlays>) -> Self {
        self.overlays = Some(overlays);
        self
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Submission settings with the configured timeout
    pub fn submission(&self) -> Submission {
        Submission::default().timeout(Duration::from_millis(self.config.timeout_ms))
    }

    /// Validate and send `form`, reporting the outcome as a notification.
    ///
    /// Only configuration problems are returned as errors; every runtime
    /// failure is reported to the user and returned as an [`Outcome`].
    pub async fn submit(&self, form: &mut Form, submission: Submission) -> Result<Outcome, SubmitError> {
        let Some(control) = form.submit.clone() else {
            error!("form submitted without a submit control");
            return Err(SubmitError::MissingSubmitControl);
        };
        let Some(url) = form
            .action
            .clone()
            .filter(|a| !a.is_empty())
            .or_else(|| self.config.page_url.clone())
        else {
            error!("form submitted without an action URL");
            return Err(SubmitError::MissingAction);
        };
        if control.is_disabled() {
            debug!(%url, "submit control is disabled, request still in flight");
            return Err(SubmitError::InFlight);
        }

        let missing = form.check_validity();
        if !missing.is_empty() {
            debug!(?missing, "required fields are empty");
            self.feedback
                .notify_error_by_code(400, &self.config.validation_message);
            return Ok(Outcome::ValidationFailed { missing });
        }

        let _disabled = Disabled::new(&control);
        let request = FormRequest {
            url,
            fields: form.entries(),
        };

        let response = match tokio::time::timeout(submission.timeout, self.transport.post(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                error!(error = %err, "form submission failed");
                self.feedback
                    .notify_error_by_code(500, &self.config.fallback_error_message);
                return Ok(Outcome::TransportFailure(Failure::Network));
            }
            Err(_) => {
                warn!(timeout = ?submission.timeout, "form submission timed out");
                self.feedback
                    .notify_error_by_code(408, &self.config.timeout_message);
                return Ok(Outcome::TimedOut);
            }
        };

        Ok(self.finish(form, response, submission))
    }

    fn finish(&self, form: &mut Form, response: HttpResponse, submission: Submission) -> Outcome {
        if !response.is_ok() {
            let reason = if response.status_text.is_empty() {
                "Unknown error"
            } else {
                response.status_text.as_str()
            };
            warn!(status = response.status, reason, "form rejected");
            self.feedback
                .notify_error_by_code(response.status, &format!("Error: {reason}"));
            return Outcome::TransportFailure(Failure::Status(response.status));
        }

        let envelope = match Envelope::parse(&response.body) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(error = %err, "form response is not JSON");
                self.feedback
                    .notify_error_by_code(500, &self.config.invalid_json_message);
                return Outcome::TransportFailure(Failure::MalformedBody);
            }
        };

        if !envelope.is_success() {
            let message = envelope.message.unwrap_or_else(|| {
                error_codes::message_for(500, Some(&self.config.server_error_message)).to_string()
            });
            warn!(status = ?envelope.status, reason = %message, "server reported a failure");
            self.feedback.notify_error(&message);
            return Outcome::ServerFailure { message };
        }

        if submission.is_popup {
            match (form.popup.as_deref(), &self.overlays) {
                (Some(id), Some(overlays)) => overlays.toggle(id),
                _ => debug!("no overlay to dismiss"),
            }
        }

        form.reset();

        match submission.on_success {
            Some(callback) => callback(&envelope.data),
            None => {
                let message = form
                    .success_message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(&self.config.success_message);
                self.feedback
                    .show_notification(&self.config.success_title, message, false);
            }
        }
        debug!("form submitted");
        Outcome::Success
    }
}
