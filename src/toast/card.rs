// SPDX-License-Identifier: MPL-2.0
//! A single toast card and its lifecycle phase.

use super::fade::Fade;
use super::kind::ToastKind;
use std::time::Instant;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a displayed toast is in its lifecycle.
///
/// Closed, expired and cleared toasts are no longer displayed, so they
/// have no phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fully visible, lifetime timer running.
    #[default]
    Active,
    /// Lifetime elapsed, fading out before removal.
    FadingOut(Fade),
}

/// A notification card owned by a [`ToastContainer`](super::ToastContainer).
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    title: String,
    description: String,
    /// Per-toast lifetime in seconds, overriding the container default.
    lifetime_secs: Option<f64>,
    phase: Phase,
}

impl Toast {
    pub(crate) fn new(
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
        lifetime_secs: Option<f64>,
    ) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            title: title.into(),
            description: description.into(),
            lifetime_secs,
            phase: Phase::Active,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The lifetime override given at spawn time, if any.
    #[must_use]
    pub fn lifetime_override(&self) -> Option<f64> {
        self.lifetime_secs
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        matches!(self.phase, Phase::FadingOut(_))
    }

    /// Opacity the card should be drawn with at `now`.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Active => 1.0,
            Phase::FadingOut(fade) => fade.opacity_at(now),
        }
    }

    pub(crate) fn start_fade(&mut self, fade: Fade) {
        self.phase = Phase::FadingOut(fade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn toast_ids_are_unique() {
        let t1 = Toast::new(ToastKind::Information, "a", "b", None);
        let t2 = Toast::new(ToastKind::Information, "a", "b", None);
        assert_ne!(t1.id(), t2.id());
    }

    #[test]
    fn new_toast_is_active_and_opaque() {
        let toast = Toast::new(ToastKind::Warning, "Warning", "Disk almost full", Some(2.0));
        assert_eq!(toast.phase(), Phase::Active);
        assert!(!toast.is_fading());
        assert_eq!(toast.opacity_at(Instant::now()), 1.0);
        assert_eq!(toast.lifetime_override(), Some(2.0));
        assert_eq!(toast.title(), "Warning");
        assert_eq!(toast.description(), "Disk almost full");
    }

    #[test]
    fn fading_toast_follows_its_fade() {
        let mut toast = Toast::new(ToastKind::Success, "Saved", "", None);
        let start = Instant::now();
        toast.start_fade(Fade::new(start, Duration::from_secs(1)));

        assert!(toast.is_fading());
        assert_eq!(toast.opacity_at(start + Duration::from_secs(2)), 0.0);
    }
}
