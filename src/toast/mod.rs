// SPDX-License-Identifier: MPL-2.0
//! Toast notification container.
//!
//! A [`ToastContainer`] stacks transient notification cards vertically.
//! Each card has a kind, a title, a description, an icon, a close button
//! and, for [`ToastKind::Undo`], an undo button. Cards expire after their
//! lifetime, fade out, and are then removed.
//!
//! # Components
//!
//! - [`container`] - `ToastContainer` with the lifecycle state machine
//! - [`card`] - `Toast` data and its `Phase`
//! - [`scheduler`] - Timer capability (`TokioScheduler`, `ManualScheduler`)
//! - [`style`] - `Stylesheet` trait and style markers
//! - [`icons`] - Default and custom icons
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{ToastContainer, ToastKind};
//!
//! let mut toasts = ToastContainer::new();
//! toasts.on_undo(|toast| Message::Undone(toast.id()));
//!
//! // In update:
//! let (_, task) = toasts.spawn(ToastKind::Information, "Information", "You have received 1 new message")?;
//! return task.map(Message::Toast);
//!
//! // Forwarding container messages:
//! Message::Toast(message) => toasts.update(message).into_task(Message::Toast),
//! ```

pub mod card;
pub mod container;
pub mod fade;
pub mod icons;
pub mod kind;
pub mod scheduler;
pub mod style;
mod view;

pub use card::{Phase, Toast, ToastId};
pub use container::ToastContainer;
pub use fade::Fade;
pub use icons::{Icon, IconSet};
pub use kind::ToastKind;
pub use scheduler::{ManualScheduler, Scheduler, TokioScheduler};
pub use style::{DefaultStylesheet, StyleClass, Stylesheet};

use iced::Task;
use std::time::Instant;

/// Messages driving the container.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button of a toast was pressed.
    Close(ToastId),
    /// The undo button of a toast was pressed.
    Undo(ToastId),
    /// The lifetime of a toast elapsed.
    Expired(ToastId),
    /// The fade-out of a toast completed.
    FadeFinished(ToastId),
    /// Redraw tick while a toast is fading.
    Frame(Instant),
}

/// Result of [`ToastContainer::update`]: follow-up work for the container
/// and the host messages produced by its handlers.
#[must_use]
pub struct Output<M> {
    pub task: Task<Message>,
    pub events: Vec<M>,
}

impl<M> Output<M> {
    pub(crate) fn none() -> Self {
        Self {
            task: Task::none(),
            events: Vec::new(),
        }
    }

    pub(crate) fn task(task: Task<Message>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    pub(crate) fn events(events: Vec<M>) -> Self {
        Self {
            task: Task::none(),
            events,
        }
    }
}

impl<M: Send + 'static> Output<M> {
    /// Folds the container task and the handler messages into one host task.
    pub fn into_task(self, wrap: impl Fn(Message) -> M + Send + 'static) -> Task<M> {
        let events = self.events.into_iter().map(Task::done);
        Task::batch(std::iter::once(self.task.map(wrap)).chain(events))
    }
}
