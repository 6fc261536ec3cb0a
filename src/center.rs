//! Toast notification center.
//!
//! One container per screen position, created once. Each notification goes
//! through `Entering -> Shown -> Closing -> detached`. Closing is reached from
//! the indicator loop, the redundant dismiss timer or the close button; all
//! of them end up in [`NotificationCenter::close_notification`], which only
//! acts once per notification.

use crate::constants::*;
use crate::handlers::Message;
use crate::rendering;
use crate::state::{Board, Card, CardView, Phase};
use crate::subscriptions::timers;
use pushform_config::ToastConfig;
use pushform_util::{NotificationId, NotificationOptions, Position};
use std::future::Future;
use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;
use tokio::{runtime::Handle, task::JoinHandle, time::Instant};
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum CenterError {
    #[error("the notification center must be created inside a tokio runtime")]
    NoRuntime,
}

/// Whether a notification is still attached after handling a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Live,
    Gone,
}

/// Why a notification started closing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The indicator ran out
    Expired,
    /// The redundant dismiss timer fired
    Timeout,
    /// The user clicked the close button
    Dismissed,
    /// Closed through the API
    Requested,
}

struct Inner {
    board: Mutex<Board>,
    config: ToastConfig,
    next_id: AtomicU64,
    runtime: Handle,
}

/// Shared handle to the notification center
///
/// Cloning is cheap; every clone talks to the same containers.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("config", &self.inner.config)
            .field("live", &self.live_count())
            .finish()
    }
}

impl NotificationCenter {
    /// Create the center and its containers on the current tokio runtime.
    pub fn new(config: ToastConfig) -> Result<Self, CenterError> {
        let runtime = Handle::try_current().map_err(|_| CenterError::NoRuntime)?;
        let center = Self {
            inner: Arc::new(Inner {
                board: Mutex::new(Board::new()),
                config,
                next_id: AtomicU64::new(1),
                runtime,
            }),
        };
        center.initialize();
        Ok(center)
    }

    /// Create one container per position. Repeated calls are no-ops.
    pub fn initialize(&self) {
        self.board().initialize();
    }

    pub fn config(&self) -> &ToastConfig {
        &self.inner.config
    }

    /// Options pre-filled with the configured defaults
    pub fn options(&self) -> NotificationOptions {
        NotificationOptions::from_config(&self.inner.config)
    }

    /// Insert a notification into its container and schedule its removal.
    pub fn create_notification(&self, options: NotificationOptions) -> NotificationId {
        let id = NotificationId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let animation = options.animation_duration();
        let safety_deadline = options.safety_deadline();
        let show_indicator = options.show_indicator;
        let position = options.position;

        if let Err(card) = self.board().insert(Card::new(id, options)) {
            error!(%id, position = %card.options.position, "no container for notification");
            return id;
        }
        debug!(%id, %position, "notification created");

        timers::after(self, animation, Message::Reveal(id));
        if show_indicator {
            timers::frames(self, id, self.frame_interval());
        }
        let safety = timers::after(self, safety_deadline, Message::Timeout(id)).abort_handle();

        let mut board = self.board();
        match board.get_mut(id) {
            Some(card) if !card.is_closing() => card.safety = Some(safety),
            _ => safety.abort(),
        }

        id
    }

    /// Start the exit transition of a notification.
    ///
    /// Returns false if the notification is already closing or detached.
    pub fn close_notification(&self, id: NotificationId) -> bool {
        self.close(id, CloseReason::Requested)
    }

    /// Close button handler
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.close(id, CloseReason::Dismissed)
    }

    fn close(&self, id: NotificationId, reason: CloseReason) -> bool {
        let (safety, delay) = {
            let mut board = self.board();
            let Some(card) = board.get_mut(id) else {
                return false;
            };
            if card.is_closing() {
                return false;
            }
            card.phase = Phase::Closing;
            card.opacity = 0.0;
            card.transform = CLOSING_TRANSFORM;
            (card.safety.take(), card.options.animation_duration())
        };
        debug!(%id, ?reason, "closing notification");

        if let Some(safety) = safety {
            if reason != CloseReason::Timeout {
                safety.abort();
            }
        }

        if delay.is_zero() {
            self.update(Message::TransitionEnd(id));
        } else {
            timers::after(self, delay, Message::TransitionEnd(id));
        }
        true
    }

    pub(crate) fn update(&self, message: Message) -> Status {
        match message {
            Message::Reveal(id) => {
                let mut board = self.board();
                let Some(card) = board.get_mut(id) else {
                    return Status::Gone;
                };
                if card.phase == Phase::Entering {
                    card.phase = Phase::Shown;
                    card.opacity = 1.0;
                    card.transform = SHOWN_TRANSFORM;
                }
                Status::Live
            }
            Message::Frame(id) => {
                let expired = {
                    let mut board = self.board();
                    let Some(card) = board.get_mut(id) else {
                        return Status::Gone;
                    };
                    if card.is_closing() {
                        return Status::Gone;
                    }
                    let Some(indicator) = card.indicator.as_mut() else {
                        return Status::Gone;
                    };
                    indicator.tick(Instant::now())
                };
                if expired {
                    self.update(Message::Expired(id));
                    return Status::Gone;
                }
                Status::Live
            }
            Message::Expired(id) => self.close_status(id, CloseReason::Expired),
            Message::Timeout(id) => self.close_status(id, CloseReason::Timeout),
            Message::TransitionEnd(id) => {
                if self.board().detach(id).is_some() {
                    debug!(%id, "notification detached");
                }
                Status::Gone
            }
        }
    }

    fn close_status(&self, id: NotificationId, reason: CloseReason) -> Status {
        self.close(id, reason);
        if self.board().get(id).is_some() {
            Status::Live
        } else {
            Status::Gone
        }
    }

    /// Snapshot of one notification
    pub fn card(&self, id: NotificationId) -> Option<CardView> {
        self.board().get(id).map(Card::view)
    }

    /// Snapshot of the cards anchored at `position`, in insertion order
    pub fn container(&self, position: Position) -> Vec<CardView> {
        self.board()
            .container(position)
            .map(|c| c.views())
            .unwrap_or_default()
    }

    /// Snapshot of every container in page order
    pub fn containers(&self) -> Vec<(Position, Vec<CardView>)> {
        self.board()
            .containers()
            .iter()
            .map(|c| (c.position, c.views()))
            .collect()
    }

    pub fn container_count(&self) -> usize {
        self.board().containers().len()
    }

    pub fn live_count(&self) -> usize {
        self.board().live_count()
    }

    /// Detached notifications, newest first
    pub fn history(&self) -> Vec<CardView> {
        self.board().retired().iter().cloned().collect()
    }

    /// Markup of all containers
    pub fn render(&self) -> String {
        rendering::render_board(&self.containers())
    }

    /// Wait until every notification has been detached.
    pub async fn settled(&self) {
        while self.live_count() > 0 {
            tokio::time::sleep(self.frame_interval()).await;
        }
    }

    pub(crate) fn spawn<F>(&self, future: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.inner.runtime.spawn(future)
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.inner.config.frame_interval_ms.max(1))
    }

    fn board(&self) -> MutexGuard<'_, Board> {
        self.inner
            .board
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
