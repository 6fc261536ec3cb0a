use pushform_util::NotificationId;

/// Events driving a notification through its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Entry transition finished, show the card
    Reveal(NotificationId),
    /// Indicator frame
    Frame(NotificationId),
    /// Indicator reached the end of the active time
    Expired(NotificationId),
    /// Redundant dismiss timer fired
    Timeout(NotificationId),
    /// Exit transition finished, detach the card
    TransitionEnd(NotificationId),
}

impl Message {
    pub fn id(&self) -> NotificationId {
        match *self {
            Message::Reveal(id)
            | Message::Frame(id)
            | Message::Expired(id)
            | Message::Timeout(id)
            | Message::TransitionEnd(id) => id,
        }
    }
}
