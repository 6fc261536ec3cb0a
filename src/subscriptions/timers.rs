//! Timer tasks feeding lifecycle messages back into the center.
//!
//! Every task owns a handle to the center and ends on its own once its
//! notification is gone, so none of them needs explicit cancellation except
//! the redundant dismiss timer.

use crate::center::{NotificationCenter, Status};
use crate::handlers::Message;
use pushform_util::NotificationId;
use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval, sleep},
};

/// Send `message` after `delay`.
pub(crate) fn after(center: &NotificationCenter, delay: Duration, message: Message) -> JoinHandle<()> {
    let handle = center.clone();
    center.spawn(async move {
        sleep(delay).await;
        tracing::trace!(id = %message.id(), ?message, "timer fired");
        handle.update(message);
    })
}

/// Drive the indicator of `id` once per frame until the card goes away.
pub(crate) fn frames(center: &NotificationCenter, id: NotificationId, frame: Duration) -> JoinHandle<()> {
    let handle = center.clone();
    center.spawn(async move {
        let mut ticks = interval(frame);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticks.tick().await;
            if handle.update(Message::Frame(id)) == Status::Gone {
                break;
            }
        }
    })
}
