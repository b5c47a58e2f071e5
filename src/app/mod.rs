// SPDX-License-Identifier: MPL-2.0
//! Application root: one window hosting a single comparison slider.
//!
//! `App` resolves labels and images from the CLI flags, the settings file and
//! the active locale, then forwards every pointer message to the comparison
//! component and logs the effects it reports.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::{self, Alignment};
use crate::ui::comparison::{self, image_reference, ComparisonInputs, Effect};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{column, container, text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    comparison: comparison::State,
    inputs: ComparisonInputs,
    theme_mode: ThemeMode,
    /// Translated settings warning shown above the comparison.
    config_warning: Option<String>,
}

/// Builds the window settings, including the rasterized branding icon.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Flags::default(), Config::default(), None)
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let (Some(before), Some(after)) = (flags.before.as_deref(), flags.after.as_deref()) {
            report_alignment(before, after);
        }
        (Self::from_config(flags, config, warning), Task::none())
    }

    /// Builds the state without touching the filesystem.
    fn from_config(flags: Flags, config: Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, &config);

        let config_warning = warning.map(|key| {
            tracing::warn!(key = %key, "settings file ignored, using defaults");
            i18n.tr(&key)
        });

        let before_label = flags
            .before_label
            .or(config.comparison.before_label)
            .unwrap_or_else(|| i18n.tr("label-before"));
        let after_label = flags
            .after_label
            .or(config.comparison.after_label)
            .unwrap_or_else(|| i18n.tr("label-after"));

        let inputs = ComparisonInputs::new(
            flags.before.as_deref().and_then(image_reference),
            flags.after.as_deref().and_then(image_reference),
        )
        .before_label(Some(before_label))
        .after_label(Some(after_label))
        .hint(i18n.tr("compare-hint"));

        tracing::info!(
            locale = %i18n.current_locale(),
            has_before = inputs.before_image.is_some(),
            has_after = inputs.after_image.is_some(),
            "starting comparison viewer"
        );

        Self {
            i18n,
            comparison: comparison::State::default(),
            inputs,
            theme_mode: config.general.theme_mode,
            config_warning,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.comparison.subscription().map(Message::Comparison)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Comparison(message) => {
                let effect = self.comparison.update(message);
                log_effect(effect);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.comparison.view(&self.inputs) {
            Some(comparison) => comparison.map(Message::Comparison),
            None => container(muted(self.i18n.tr("empty-state"), typography::BODY))
                .center(Length::Fill)
                .into(),
        };

        let mut content = column![].spacing(spacing::XS);
        if let Some(warning) = &self.config_warning {
            content = content.push(muted(warning.clone(), typography::CAPTION));
        }

        container(content.push(body))
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Current slider value, exposed for tests.
    pub fn slider_percent(&self) -> f32 {
        self.comparison.position().value()
    }

    pub fn inputs(&self) -> &ComparisonInputs {
        &self.inputs
    }

    pub fn config_warning(&self) -> Option<&str> {
        self.config_warning.as_deref()
    }
}

fn muted<'a>(content: String, size: f32) -> text::Text<'a> {
    text(content)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        })
}

fn log_effect(effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::DragStarted(position) => {
            tracing::debug!(percent = position.value(), "drag started");
        }
        Effect::PositionChanged(position) => {
            tracing::trace!(percent = position.value(), "slider moved");
        }
        Effect::DragEnded(position) => {
            tracing::debug!(percent = position.value(), "drag ended");
        }
    }
}

/// Warns when the two images will not line up under the divider.
fn report_alignment(before: &str, after: &str) {
    if before.trim().is_empty() || after.trim().is_empty() {
        return;
    }
    match media::check_alignment(Path::new(before.trim()), Path::new(after.trim())) {
        Ok(Alignment::Aligned) => {}
        Ok(Alignment::Mismatched { before, after }) => {
            tracing::warn!(
                before = %format!("{}x{}", before.width, before.height),
                after = %format!("{}x{}", after.width, after.height),
                "aspect ratios differ, images will not line up under the divider"
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not read image dimensions");
        }
    }
}
