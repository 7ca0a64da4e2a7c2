// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config, ToastConfig};
use iced_toast::error::Error;
use iced_toast::i18n::fluent::I18n;
use iced_toast::toast::{ManualScheduler, Message, ToastContainer, ToastId, ToastKind};
use std::time::Duration;
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq)]
enum HostMessage {
    Undo(ToastId),
    Closed(ToastId),
    Expired(ToastId),
    Removed(ToastId),
}

fn host_container() -> (ToastContainer<HostMessage>, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let mut container = ToastContainer::with_scheduler(scheduler.clone());
    container.on_undo(|t| HostMessage::Undo(t.id()));
    container.on_closed(|t| HostMessage::Closed(t.id()));
    container.on_expired(|t| HostMessage::Expired(t.id()));
    container.on_removed(|t| HostMessage::Removed(t.id()));
    (container, scheduler)
}

/// Delivers every pending timer to the container, returning the host
/// messages and the total scheduled delay.
fn fire_pending(
    container: &mut ToastContainer<HostMessage>,
    scheduler: &ManualScheduler,
) -> (Vec<HostMessage>, Duration) {
    let mut events = Vec::new();
    let mut elapsed = Duration::ZERO;
    for timer in scheduler.take() {
        elapsed = elapsed.max(timer.delay);
        events.extend(container.update(timer.message).events);
    }
    (events, elapsed)
}

#[test]
fn information_toast_lives_for_lifetime_plus_fade() {
    let (mut container, scheduler) = host_container();
    assert_eq!(container.lifetime(), 5.0);

    let (id, _) = container
        .spawn(
            ToastKind::Information,
            "Information",
            "You have received 1 new message",
        )
        .expect("spawn should succeed");
    assert_eq!(container.len(), 1);

    let (events, lifetime) = fire_pending(&mut container, &scheduler);
    assert!(events.is_empty());
    assert_eq!(lifetime, Duration::from_secs(5));
    assert_eq!(container.len(), 1, "toast stays visible while fading");

    let (events, fade) = fire_pending(&mut container, &scheduler);
    assert_eq!(fade, Duration::from_secs_f64(container.fade_out_duration()));
    assert_eq!(container.len(), 0);
    assert_eq!(
        events,
        vec![HostMessage::Expired(id), HostMessage::Removed(id)]
    );
}

#[test]
fn user_close_beats_timer() {
    let (mut container, scheduler) = host_container();
    let (id, _) = container
        .spawn(ToastKind::Warning, "Warning", "Battery low")
        .expect("spawn should succeed");

    let events = container.update(Message::Close(id)).events;
    assert_eq!(events, vec![HostMessage::Closed(id), HostMessage::Removed(id)]);

    let (late, _) = fire_pending(&mut container, &scheduler);
    assert!(late.is_empty());
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn clear_silences_pending_timers() {
    let (mut container, scheduler) = host_container();
    for kind in ToastKind::ALL {
        container
            .spawn(kind, "title", "description")
            .expect("spawn should succeed");
    }
    assert_eq!(container.len(), 4);

    container.clear();
    assert!(container.is_empty());

    let (events, _) = fire_pending(&mut container, &scheduler);
    assert!(events.is_empty());
    assert_eq!(scheduler.pending_count(), 0, "no fade starts after clear");
}

#[test]
fn undo_requires_handler_and_keeps_card() {
    let scheduler = ManualScheduler::new();
    let mut bare: ToastContainer<HostMessage> = ToastContainer::with_scheduler(scheduler);
    assert!(matches!(
        bare.spawn(ToastKind::Undo, "Deleted", "1 item"),
        Err(Error::InvalidState(_))
    ));
    assert!(bare.is_empty());

    let (mut container, _) = host_container();
    let (id, _) = container
        .spawn(ToastKind::Undo, "Deleted", "1 item")
        .expect("spawn should succeed");
    let events = container.update(Message::Undo(id)).events;
    assert_eq!(events, vec![HostMessage::Undo(id)]);
    assert_eq!(container.len(), 1);
}

#[test]
fn per_toast_lifetime_only_affects_that_toast() {
    let (mut container, scheduler) = host_container();
    container
        .spawn_with_lifetime(ToastKind::Success, "Saved", "", 0.5)
        .expect("spawn should succeed");
    container
        .spawn(ToastKind::Success, "Saved", "")
        .expect("spawn should succeed");

    let delays: Vec<_> = scheduler.take().into_iter().map(|t| t.delay).collect();
    assert_eq!(delays, vec![Duration::from_millis(500), Duration::from_secs(5)]);
}

#[test]
fn container_follows_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        toast: ToastConfig {
            lifetime_secs: Some(2.5),
            fade_out_secs: Some(0.5),
            width: Some(250.0),
            height: Some(80.0),
            neutral_close_button: Some(true),
        },
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let container: ToastContainer<()> =
        ToastContainer::from_config(&loaded).expect("config is valid");

    assert_eq!(container.lifetime(), 2.5);
    assert_eq!(container.fade_out_duration(), 0.5);
    assert_eq!(container.toast_width(), 250.0);
    assert_eq!(container.toast_height(), 80.0);
    assert!(container.neutral_close_button());
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("toast-undo-button"), "UNDO");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("toast-undo-button"), "ANNULER");
}
