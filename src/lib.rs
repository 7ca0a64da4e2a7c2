// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification container for the Iced GUI toolkit.
//!
//! A [`toast::ToastContainer`] stacks transient notification cards
//! (information, warning, success, undo), removes them after a fade-out
//! once their lifetime elapses, and reports closes, expiries and undo
//! clicks back to the host application as messages.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod toast;
pub mod ui;
