// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for the toast container settings.

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a toast stays fully visible before fading (in seconds).
pub const DEFAULT_LIFETIME_SECS: f64 = 5.0;

/// Default length of the fade-out transition (in seconds).
pub const DEFAULT_FADE_OUT_SECS: f64 = 1.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default preferred toast width (in logical pixels).
pub const DEFAULT_TOAST_WIDTH: f32 = 350.0;

/// Default preferred toast height (in logical pixels).
///
/// Tall enough for the undo button row.
pub const DEFAULT_TOAST_HEIGHT: f32 = 100.0;

/// Default vertical gap between stacked toasts (in logical pixels).
pub const DEFAULT_TOAST_SPACING: f32 = 10.0;

/// Default label of the undo button.
pub const DEFAULT_UNDO_LABEL: &str = "UNDO";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_LIFETIME_SECS > 0.0);
    assert!(DEFAULT_FADE_OUT_SECS > 0.0);
    assert!(DEFAULT_TOAST_WIDTH > 0.0);
    assert!(DEFAULT_TOAST_HEIGHT > 0.0);
    assert!(DEFAULT_TOAST_SPACING >= 0.0);
};
