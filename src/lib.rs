//! Toast notifications and asynchronous form submission for web pages.
//!
//! [`NotificationCenter`] owns one container per screen position and runs
//! every toast through entry, auto-dismiss and removal. [`FormSubmitter`]
//! validates and posts forms and reports each outcome as a single toast.

mod constants;
mod handlers;
mod subscriptions;

pub mod center;
pub mod feedback;
pub mod logging;
pub mod rendering;
pub mod state;
pub mod submit;
pub mod transport;
pub mod widgets;

pub use center::{CenterError, CloseReason, NotificationCenter};
pub use feedback::{Alert, Feedback, LogAlert};
pub use pushform_config::{ConfigError, FeedbackConfig, Position, SubmitConfig, ToastConfig};
pub use pushform_util::{
    Field, FieldKind, FieldValue, Form, NotificationId, NotificationOptions, SubmitControl,
};
pub use state::{CardView, Phase};
pub use submit::{Failure, FormSubmitter, Outcome, Overlays, Submission, SubmitError};
pub use transport::{FormRequest, HttpResponse, HttpTransport, Transport, TransportError};
