// SPDX-License-Identifier: MPL-2.0
//! Rendering of the comparison card: header row plus the clipped image frame.

use super::{ComparisonInputs, Message, State};
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::ComparisonFrame;
use iced::widget::{column, container, image, row, text};
use iced::{font, Alignment, Border, ContentFit, Element, Font, Length, Theme};

const LABEL_FONT: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

impl State {
    /// Renders the comparison, or nothing when either image is missing.
    pub fn view<'a>(&'a self, inputs: &'a ComparisonInputs) -> Option<Element<'a, Message>> {
        let (before, after) = inputs.images()?;

        let after_image = image(after.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);
        let before_image = image(before.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);

        let frame = ComparisonFrame::new(
            after_image,
            before_image,
            handle(),
            self.position,
            |pointer, position, geometry| Message::Pressed {
                pointer,
                position,
                geometry,
            },
        )
        .on_geometry(Message::GeometryChanged)
        .on_release(Message::Released)
        .dragging(self.is_dragging())
        .divider(palette::ACCENT_500, border::WIDTH_MD);

        let backdrop = container(frame).style(|theme: &Theme| container::Style {
            background: Some(ColorScheme::for_theme(theme).surface_frame.into()),
            ..container::Style::default()
        });

        let card = container(column![header(inputs), backdrop])
            .padding(spacing::XXS)
            .width(Length::Fill)
            .style(card_style);

        Some(card.into())
    }
}

fn header(inputs: &ComparisonInputs) -> Element<'_, Message> {
    let hint = row![
        icons::sized(icons::move_horizontal(), sizing::ICON_XS, muted_color),
        caption(&inputs.hint),
    ]
    .spacing(spacing::XXS)
    .align_y(Alignment::Center);

    row![
        caption(&inputs.before_label),
        container(hint).center_x(Length::Fill),
        caption(&inputs.after_label),
    ]
    .align_y(Alignment::Center)
    .padding([spacing::XS, spacing::MD])
    .into()
}

fn caption<'a>(label: &str) -> text::Text<'a> {
    text(label.to_uppercase())
        .size(typography::CAPTION)
        .font(LABEL_FONT)
        .style(|theme: &Theme| text::Style {
            color: Some(muted_color(theme)),
        })
}

fn handle<'a>() -> Element<'a, Message> {
    container(icons::sized(
        icons::move_horizontal(),
        sizing::ICON_SM,
        |theme: &Theme| ColorScheme::for_theme(theme).on_accent,
    ))
    .center_x(Length::Fixed(sizing::HANDLE_DIAMETER))
    .center_y(Length::Fixed(sizing::HANDLE_DIAMETER))
    .style(|theme: &Theme| container::Style {
        background: Some(ColorScheme::for_theme(theme).accent.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..container::Style::default()
    })
    .into()
}

fn muted_color(theme: &Theme) -> iced::Color {
    ColorScheme::for_theme(theme).text_muted
}

fn card_style(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(colors.surface_primary.into()),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}
