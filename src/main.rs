// SPDX-License-Identifier: MPL-2.0
//! Demo host: one button spawns a toast of a random kind.

use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Subscription, Task, Theme};
use iced_toast::config;
use iced_toast::i18n::I18n;
use iced_toast::paths;
use iced_toast::toast::{self, ToastContainer, ToastId, ToastKind};
use iced_toast::ui::design_tokens::spacing;
use std::cell::RefCell;

#[derive(Debug, Clone)]
enum Message {
    Spawn,
    Clear,
    Toast(toast::Message),
    Undone(ToastId),
    Removed(ToastId),
}

struct Demo {
    i18n: I18n,
    toasts: ToastContainer<Message>,
    theme: Theme,
}

impl Demo {
    fn new(lang: Option<String>) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let i18n = I18n::new(lang, &config);

        let mut toasts = ToastContainer::from_config(&config).unwrap_or_else(|err| {
            log::warn!("invalid toast settings, using defaults: {err}");
            ToastContainer::new()
        });
        toasts.set_undo_label(i18n.tr("toast-undo-button"));
        toasts.on_undo(|toast| Message::Undone(toast.id()));
        toasts.on_removed(|toast| Message::Removed(toast.id()));

        let mut demo = Self {
            i18n,
            toasts,
            theme: config.general.theme_mode.to_iced_theme(),
        };

        let task = match warning {
            Some(key) => {
                let title = demo.i18n.tr("toast-warning-title");
                let description = demo.i18n.tr(&key);
                demo.spawn(ToastKind::Warning, title, description)
            }
            None => Task::none(),
        };
        (demo, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn spawn(&mut self, kind: ToastKind, title: String, description: String) -> Task<Message> {
        match self.toasts.spawn(kind, title, description) {
            Ok((_, task)) => task.map(Message::Toast),
            Err(err) => {
                log::error!("failed to spawn {kind} toast: {err}");
                Task::none()
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Spawn => {
                let kind = ToastKind::ALL[rand::random_range(0..ToastKind::ALL.len())];
                let title = self.i18n.tr(&format!("toast-{kind}-title"));
                let description = self.i18n.tr(&format!("toast-{kind}-description"));
                self.spawn(kind, title, description)
            }
            Message::Clear => {
                self.toasts.clear();
                Task::none()
            }
            Message::Toast(message) => self.toasts.update(message).into_task(Message::Toast),
            Message::Undone(id) => {
                let closed = self.toasts.close(id);
                let title = self.i18n.tr("toast-undone-title");
                let description = self.i18n.tr("toast-undone-description");
                let spawned = self.spawn(ToastKind::Success, title, description);
                Task::batch(closed.into_iter().map(Task::done).chain(std::iter::once(spawned)))
            }
            Message::Removed(id) => {
                log::info!("toast {id:?} removed, {} left", self.toasts.len());
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(spacing::SM)
            .push(button(Text::new(self.i18n.tr("demo-spawn-button"))).on_press(Message::Spawn))
            .push(button(Text::new(self.i18n.tr("demo-clear-button"))).on_press(Message::Clear));

        let stack = Container::new(self.toasts.view().map(Message::Toast))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top);

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(controls)
            .push(stack)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }
}

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    paths::init_cli_override(config_dir);

    // iced requires an Fn boot closure; the language is only consumed once
    let boot_state = RefCell::new(Some(lang));
    let boot = move || Demo::new(boot_state.borrow_mut().take().flatten());

    iced::application(boot, Demo::update, Demo::view)
        .title(Demo::title)
        .theme(Demo::theme)
        .subscription(Demo::subscription)
        .window_size(iced::Size::new(720.0, 560.0))
        .run()
}
