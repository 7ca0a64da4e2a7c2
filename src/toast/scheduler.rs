// SPDX-License-Identifier: MPL-2.0
//! Timer capability used by the container.
//!
//! The container never sleeps itself: it asks a [`Scheduler`] for a task
//! that resolves to a [`Message`] once a duration has elapsed. The default
//! [`TokioScheduler`] runs on the Iced executor; [`ManualScheduler`] only
//! records requests so tests (or hosts that drive time themselves) decide
//! when timers fire.

use super::Message;
use iced::Task;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Schedules one-shot messages.
pub trait Scheduler {
    /// Returns a task producing `message` after `delay`.
    fn after(&self, delay: Duration, message: Message) -> Task<Message>;

    /// Returns a task producing `message` once an opacity transition of
    /// `duration` has played.
    fn fade_out(&self, duration: Duration, message: Message) -> Task<Message> {
        self.after(duration, message)
    }
}

/// Sleeps on the tokio runtime backing the Iced executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn after(&self, delay: Duration, message: Message) -> Task<Message> {
        // The sleep is created inside the future so it binds to the
        // runtime that polls it.
        Task::perform(async move { tokio::time::sleep(delay).await }, move |()| message)
    }
}

/// What a [`ManualScheduler`] was asked to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Delay,
    Fade,
}

/// A recorded scheduling request.
#[derive(Debug, Clone)]
pub struct Scheduled {
    pub kind: TimerKind,
    pub delay: Duration,
    pub message: Message,
}

/// Records scheduling requests instead of running them.
///
/// Clones share the same record, so a test can keep one handle while the
/// container owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: Rc<RefCell<Vec<Scheduled>>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests not yet taken.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Removes and returns every recorded request, oldest first.
    pub fn take(&self) -> Vec<Scheduled> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    fn record(&self, kind: TimerKind, delay: Duration, message: Message) -> Task<Message> {
        self.pending.borrow_mut().push(Scheduled {
            kind,
            delay,
            message,
        });
        Task::none()
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, message: Message) -> Task<Message> {
        self.record(TimerKind::Delay, delay, message)
    }

    fn fade_out(&self, duration: Duration, message: Message) -> Task<Message> {
        self.record(TimerKind::Fade, duration, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastId;

    #[test]
    fn manual_scheduler_records_in_order() {
        let scheduler = ManualScheduler::new();
        let first = ToastId::new();
        let second = ToastId::new();

        let _ = scheduler.after(Duration::from_secs(5), Message::Expired(first));
        let _ = scheduler.fade_out(Duration::from_secs(1), Message::FadeFinished(second));
        assert_eq!(scheduler.pending_count(), 2);

        let taken = scheduler.take();
        assert_eq!(taken[0].kind, TimerKind::Delay);
        assert_eq!(taken[0].delay, Duration::from_secs(5));
        assert!(matches!(taken[0].message, Message::Expired(id) if id == first));
        assert_eq!(taken[1].kind, TimerKind::Fade);
        assert!(matches!(taken[1].message, Message::FadeFinished(id) if id == second));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn tokio_scheduler_returns_a_pending_task() {
        let id = ToastId::new();
        let task = TokioScheduler.after(Duration::from_millis(10), Message::Expired(id));
        assert_eq!(task.units(), 1);

        let task = TokioScheduler.fade_out(Duration::from_millis(10), Message::FadeFinished(id));
        assert_eq!(task.units(), 1);
    }

    #[test]
    fn clones_share_the_record() {
        let scheduler = ManualScheduler::new();
        let handle = scheduler.clone();
        let _ = scheduler.after(Duration::from_millis(10), Message::Expired(ToastId::new()));
        assert_eq!(handle.pending_count(), 1);
    }
}
