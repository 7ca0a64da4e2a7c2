// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Localization uses the Fluent system with `.ftl` files embedded at
//! compile time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to `en-US` when the requested locale is unavailable

pub mod fluent;

pub use fluent::I18n;
