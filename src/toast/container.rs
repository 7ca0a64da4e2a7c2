// SPDX-License-Identifier: MPL-2.0
//! The toast container: spawning, timed removal and handler dispatch.

use super::card::{Toast, ToastId};
use super::fade::Fade;
use super::icons::{Icon, IconSet};
use super::kind::ToastKind;
use super::scheduler::{Scheduler, TokioScheduler};
use super::style::{DefaultStylesheet, Stylesheet};
use super::{Message, Output};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use iced::{time, Subscription, Task};
use std::fmt;
use std::time::{Duration, Instant};

/// Interval between redraws while a toast is fading out.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

type Handler<M> = Box<dyn Fn(&Toast) -> M>;

/// A vertical stack of toast cards.
///
/// `M` is the host application's message type. Lifecycle handlers turn a
/// toast into an `M`, which [`ToastContainer::update`] hands back through
/// [`Output`].
pub struct ToastContainer<M> {
    /// Displayed toasts, top to bottom.
    toasts: Vec<Toast>,
    lifetime: Duration,
    fade_out: Duration,
    width: f32,
    height: f32,
    neutral_close_button: bool,
    undo_label: String,
    icons: IconSet,
    stylesheet: Box<dyn Stylesheet>,
    scheduler: Box<dyn Scheduler>,
    /// Last frame instant, used to compute fade opacity.
    now: Instant,
    on_undo: Option<Handler<M>>,
    on_closed: Option<Handler<M>>,
    on_expired: Option<Handler<M>>,
    on_removed: Option<Handler<M>>,
}

impl<M> fmt::Debug for ToastContainer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastContainer")
            .field("toasts", &self.toasts)
            .field("lifetime", &self.lifetime)
            .field("fade_out", &self.fade_out)
            .field("has_undo_handler", &self.on_undo.is_some())
            .finish_non_exhaustive()
    }
}

impl<M> Default for ToastContainer<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts strictly positive seconds into a non-zero [`Duration`].
///
/// Values too large for a `Duration` are rejected here so that no later
/// conversion can panic.
fn positive_secs(name: &str, value: f64) -> Result<Duration> {
    if !(value.is_finite() && value > 0.0) {
        return Err(Error::non_positive(name, value));
    }
    match Duration::try_from_secs_f64(value) {
        Ok(duration) if !duration.is_zero() => Ok(duration),
        Ok(_) => Err(Error::non_positive(name, value)),
        Err(err) => Err(Error::InvalidArgument(format!(
            "{name} of {value} seconds is out of range: {err}"
        ))),
    }
}

fn positive_size(name: &str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} must be a positive size, got {value}"
        )))
    }
}

impl<M> ToastContainer<M> {
    /// Creates an empty container with default settings and the tokio
    /// scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scheduler(TokioScheduler)
    }

    /// Creates an empty container that schedules its timers through
    /// `scheduler`.
    #[must_use]
    pub fn with_scheduler(scheduler: impl Scheduler + 'static) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime: Duration::from_secs_f64(config::DEFAULT_LIFETIME_SECS),
            fade_out: Duration::from_secs_f64(config::DEFAULT_FADE_OUT_SECS),
            width: config::DEFAULT_TOAST_WIDTH,
            height: config::DEFAULT_TOAST_HEIGHT,
            neutral_close_button: false,
            undo_label: config::DEFAULT_UNDO_LABEL.to_string(),
            icons: IconSet::default(),
            stylesheet: Box::new(DefaultStylesheet),
            scheduler: Box::new(scheduler),
            now: Instant::now(),
            on_undo: None,
            on_closed: None,
            on_expired: None,
            on_removed: None,
        }
    }

    /// Creates a container from the `[toast]` section of `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut container = Self::new();
        container.apply_config(config)?;
        Ok(container)
    }

    /// Applies the `[toast]` section of `config`, leaving unset keys alone.
    ///
    /// Values are validated before anything changes.
    pub fn apply_config(&mut self, config: &Config) -> Result<()> {
        let toast = &config.toast;
        let lifetime = toast
            .lifetime_secs
            .map(|v| positive_secs("lifetime", v))
            .transpose()?;
        let fade_out = toast
            .fade_out_secs
            .map(|v| positive_secs("fade-out duration", v))
            .transpose()?;
        let width = toast.width.map(|v| positive_size("width", v)).transpose()?;
        let height = toast.height.map(|v| positive_size("height", v)).transpose()?;

        if let Some(v) = lifetime {
            self.lifetime = v;
        }
        if let Some(v) = fade_out {
            self.fade_out = v;
        }
        if let Some(v) = width {
            self.width = v;
        }
        if let Some(v) = height {
            self.height = v;
        }
        if let Some(v) = toast.neutral_close_button {
            self.neutral_close_button = v;
        }
        Ok(())
    }

    // =========================================================================
    // Spawning and removal
    // =========================================================================

    /// Spawns a toast living for the container's default lifetime.
    ///
    /// Returns the new toast's id and the task delivering its expiry.
    pub fn spawn(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(ToastId, Task<Message>)> {
        let lifetime = self.lifetime;
        self.push(kind, title.into(), description.into(), None, lifetime)
    }

    /// Spawns a toast living for `lifetime_secs` instead of the default.
    pub fn spawn_with_lifetime(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
        lifetime_secs: f64,
    ) -> Result<(ToastId, Task<Message>)> {
        let lifetime = positive_secs("lifetime", lifetime_secs)?;
        self.push(
            kind,
            title.into(),
            description.into(),
            Some(lifetime_secs),
            lifetime,
        )
    }

    fn push(
        &mut self,
        kind: ToastKind,
        title: String,
        description: String,
        lifetime_override: Option<f64>,
        lifetime: Duration,
    ) -> Result<(ToastId, Task<Message>)> {
        if kind == ToastKind::Undo && self.on_undo.is_none() {
            log::warn!("refusing to spawn undo toast without an undo handler");
            return Err(Error::InvalidState(
                "an undo toast requires an undo handler".to_string(),
            ));
        }

        let toast = Toast::new(kind, title, description, lifetime_override);
        let id = toast.id();
        log::debug!("spawning {kind} toast {id:?}, expires in {lifetime:?}");

        self.toasts.push(toast);
        let task = self.scheduler.after(lifetime, Message::Expired(id));
        Ok((id, task))
    }

    /// Removes every toast at once. No handler fires; pending timers of
    /// the removed toasts become no-ops.
    pub fn clear(&mut self) {
        log::debug!("clearing {} toasts", self.toasts.len());
        self.toasts.clear();
    }

    /// Closes a toast as if its close button was pressed.
    ///
    /// Produces the closed and removed handler messages; closing a toast that
    /// is no longer displayed produces nothing.
    pub fn close(&mut self, id: ToastId) -> Vec<M> {
        let mut events = Vec::new();
        if let Some(toast) = self.detach(id) {
            log::debug!("toast {id:?} closed by user");
            emit(&self.on_closed, &toast, &mut events);
            emit(&self.on_removed, &toast, &mut events);
        }
        events
    }

    fn detach(&mut self, id: ToastId) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| t.id() == id)?;
        Some(self.toasts.remove(pos))
    }

    // =========================================================================
    // Message handling
    // =========================================================================

    /// Handles a container message.
    pub fn update(&mut self, message: Message) -> Output<M> {
        match message {
            Message::Close(id) => Output::events(self.close(id)),
            Message::Undo(id) => {
                let mut events = Vec::new();
                if let Some(toast) = self.get(id) {
                    emit(&self.on_undo, toast, &mut events);
                }
                Output::events(events)
            }
            Message::Expired(id) => Output::task(self.expire(id)),
            Message::FadeFinished(id) => Output::events(self.finish_fade(id)),
            Message::Frame(now) => {
                self.now = now;
                Output::none()
            }
        }
    }

    /// Starts the fade-out of an active toast whose lifetime elapsed.
    fn expire(&mut self, id: ToastId) -> Task<Message> {
        let now = Instant::now();
        let fade_out = self.fade_out;

        let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) else {
            log::debug!("ignoring expiry of toast {id:?}, no longer displayed");
            return Task::none();
        };
        if toast.is_fading() {
            return Task::none();
        }

        log::debug!("toast {id:?} expired, fading out over {fade_out:?}");
        toast.start_fade(Fade::new(now, fade_out));
        self.now = now;
        self.scheduler.fade_out(fade_out, Message::FadeFinished(id))
    }

    fn finish_fade(&mut self, id: ToastId) -> Vec<M> {
        let mut events = Vec::new();
        let fading = self.get(id).is_some_and(Toast::is_fading);
        if !fading {
            log::debug!("ignoring end of fade for toast {id:?}");
            return events;
        }
        if let Some(toast) = self.detach(id) {
            emit(&self.on_expired, &toast, &mut events);
            emit(&self.on_removed, &toast, &mut events);
        }
        events
    }

    /// Redraw ticks while any toast is fading.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Whether at least one toast is fading out.
    pub(crate) fn is_animating(&self) -> bool {
        self.toasts.iter().any(Toast::is_fading)
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Sets the handler for the undo button. Required before spawning
    /// [`ToastKind::Undo`] toasts.
    pub fn on_undo(&mut self, handler: impl Fn(&Toast) -> M + 'static) {
        self.on_undo = Some(Box::new(handler));
    }

    /// Sets the handler for toasts closed by the user.
    pub fn on_closed(&mut self, handler: impl Fn(&Toast) -> M + 'static) {
        self.on_closed = Some(Box::new(handler));
    }

    /// Sets the handler for toasts removed after their lifetime and fade.
    pub fn on_expired(&mut self, handler: impl Fn(&Toast) -> M + 'static) {
        self.on_expired = Some(Box::new(handler));
    }

    /// Sets the handler called after either a close or an expiry.
    pub fn on_removed(&mut self, handler: impl Fn(&Toast) -> M + 'static) {
        self.on_removed = Some(Box::new(handler));
    }

    #[must_use]
    pub fn has_undo_handler(&self) -> bool {
        self.on_undo.is_some()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Displayed toasts, top to bottom.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Default lifetime in seconds.
    #[must_use]
    pub fn lifetime(&self) -> f64 {
        self.lifetime.as_secs_f64()
    }

    /// Sets the default lifetime for toasts spawned from now on.
    pub fn set_lifetime(&mut self, secs: f64) -> Result<()> {
        self.lifetime = positive_secs("lifetime", secs)?;
        Ok(())
    }

    /// Fade-out duration in seconds.
    #[must_use]
    pub fn fade_out_duration(&self) -> f64 {
        self.fade_out.as_secs_f64()
    }

    pub fn set_fade_out_duration(&mut self, secs: f64) -> Result<()> {
        self.fade_out = positive_secs("fade-out duration", secs)?;
        Ok(())
    }

    #[must_use]
    pub fn toast_width(&self) -> f32 {
        self.width
    }

    pub fn set_toast_width(&mut self, width: f32) -> Result<()> {
        self.width = positive_size("width", width)?;
        Ok(())
    }

    #[must_use]
    pub fn toast_height(&self) -> f32 {
        self.height
    }

    pub fn set_toast_height(&mut self, height: f32) -> Result<()> {
        self.height = positive_size("height", height)?;
        Ok(())
    }

    /// Whether every card uses the neutral close icon.
    #[must_use]
    pub fn neutral_close_button(&self) -> bool {
        self.neutral_close_button
    }

    pub fn set_neutral_close_button(&mut self, neutral: bool) {
        self.neutral_close_button = neutral;
    }

    #[must_use]
    pub fn undo_label(&self) -> &str {
        &self.undo_label
    }

    pub fn set_undo_label(&mut self, label: impl Into<String>) {
        self.undo_label = label.into();
    }

    #[must_use]
    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn set_icon(&mut self, kind: ToastKind, icon: impl Into<Icon>) {
        self.icons.set_icon(kind, icon.into());
    }

    pub fn set_close_icon(&mut self, kind: ToastKind, icon: impl Into<Icon>) {
        self.icons.set_close_icon(kind, icon.into());
    }

    pub fn set_neutral_close_icon(&mut self, icon: impl Into<Icon>) {
        self.icons.set_neutral_close_icon(icon.into());
    }

    pub fn set_stylesheet(&mut self, stylesheet: impl Stylesheet + 'static) {
        self.stylesheet = Box::new(stylesheet);
    }

    pub(crate) fn stylesheet(&self) -> &dyn Stylesheet {
        self.stylesheet.as_ref()
    }

    pub(crate) fn now(&self) -> Instant {
        self.now
    }
}

fn emit<M>(handler: &Option<Handler<M>>, toast: &Toast, events: &mut Vec<M>) {
    if let Some(handler) = handler {
        events.push(handler(toast));
    }
}
