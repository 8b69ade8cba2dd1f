// SPDX-License-Identifier: MPL-2.0
//! Carousel screen rendering.
//!
//! Everything visual is read back from the [`SurfaceModel`]; this module
//! never decides which slide is current. Interactive pieces emit an
//! [`Event`]: navigation requests go to the carousel, track scroll reports
//! let the app pull a wheel- or finger-scrolled track back into place.

use crate::carousel::{NavigationRequest, SlideAnimation, SlideNumber};
use crate::deck::{Deck, Slide};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::surface_model::{SlideVisual, SurfaceModel, TRACK_ID};
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, progress_bar, tooltip, Column, Container, Id, Row, Scrollable, Space, Stack, Text,
};
use iced::{Element, Length};

/// Messages emitted by the carousel screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Navigate(NavigationRequest),
    /// The track's horizontal scroll position changed to this x.
    TrackScrolled(f32),
}

/// Context required to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub deck: &'a Deck,
    pub surface: &'a SurfaceModel,
    pub current: SlideNumber,
    pub colors: &'a ColorScheme,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Event> {
    let stage = Stack::new()
        .push(track(&ctx))
        .push(side_control(&ctx, NavigationRequest::Previous))
        .push(side_control(&ctx, NavigationRequest::Next))
        .width(Length::Fill)
        .height(Length::Fill);

    let progress = progress_bar(0.0..=100.0, ctx.surface.progress())
        .girth(sizing::PROGRESS_HEIGHT);

    let position = Text::new(ctx.i18n.tr_with_args(
        "carousel-position",
        &[
            ("current", ctx.current.get().to_string()),
            ("total", ctx.deck.len().to_string()),
        ],
    ))
    .size(typography::CAPTION)
    .color(ctx.colors.muted_text);

    let footer = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(indicators(&ctx))
        .push(Space::new().width(Length::Fill))
        .push(position);

    Column::new()
        .push(stage)
        .push(progress)
        .push(Container::new(footer).padding([spacing::XS, spacing::MD]))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Horizontal strip holding every slide at viewport width.
fn track<'a>(ctx: &ViewContext<'a>) -> Element<'a, Event> {
    let width = ctx.surface.viewport_width();
    let row = ctx
        .deck
        .slides
        .iter()
        .enumerate()
        .fold(Row::new(), |row, (position, slide)| {
            let visual = ctx.surface.slide(SlideNumber::from_position(position));
            row.push(slide_panel(slide, visual, width, ctx.colors))
        });

    Scrollable::new(row)
        .id(Id::new(TRACK_ID))
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .on_scroll(|viewport| Event::TrackScrolled(viewport.absolute_offset().x))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn slide_panel<'a>(
    slide: &'a Slide,
    visual: SlideVisual,
    width: f32,
    colors: &ColorScheme,
) -> Element<'a, Event> {
    let emphasized = visual.played == Some(SlideAnimation::Emphasize);
    let (title_size, title_color) = if emphasized {
        (typography::SLIDE_TITLE_EMPHASIZED, colors.accent)
    } else {
        (typography::SLIDE_TITLE, colors.slide_text)
    };

    // reveal-items slides keep their body hidden until the animation plays
    let body_visible = slide.animation != Some(SlideAnimation::RevealItems)
        || visual.played == Some(SlideAnimation::RevealItems);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(slide.title.as_str()).size(title_size).color(title_color));

    if body_visible {
        content = slide.body.iter().fold(content, |column, line| {
            column.push(Text::new(line.as_str()).size(typography::SLIDE_BODY))
        });
    }

    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::slide(
            colors.slide_background,
            colors.slide_text,
        ))
        .into()
}

fn side_control<'a>(
    ctx: &ViewContext<'a>,
    request: NavigationRequest,
) -> Element<'a, Event> {
    let (glyph, label_key, align) = match request {
        NavigationRequest::Previous => ("◀", "carousel-previous", Horizontal::Left),
        _ => ("▶", "carousel-next", Horizontal::Right),
    };

    let control = button(
        Text::new(glyph)
            .size(typography::SLIDE_BODY)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::CONTROL))
    .height(Length::Fixed(sizing::CONTROL))
    .style(styles::button::control)
    .on_press(Event::Navigate(request));

    let labelled = tooltip(
        control,
        Text::new(ctx.i18n.tr(label_key)),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS);

    Container::new(labelled)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align)
        .align_y(Vertical::Center)
        .into()
}

/// One clickable indicator per slide.
fn indicators<'a>(ctx: &ViewContext<'a>) -> Element<'a, Event> {
    (0..ctx.deck.len())
        .map(SlideNumber::from_position)
        .fold(
            Row::new().spacing(spacing::XS).align_y(Vertical::Center),
            |row, slide| {
                let active = ctx.surface.is_indicator_active(slide);
                let (width, color) = if active {
                    (sizing::INDICATOR_ACTIVE, ctx.colors.indicator_active)
                } else {
                    (sizing::INDICATOR, ctx.colors.indicator_idle)
                };

                let dot = button(Space::new())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(sizing::INDICATOR))
                    .padding(0)
                    .style(styles::button::indicator(color, active))
                    .on_press(Event::Navigate(NavigationRequest::GoTo(slide.get())));

                let hint = ctx.i18n.tr_with_args(
                    "carousel-indicator-tooltip",
                    &[("index", slide.get().to_string())],
                );
                row.push(tooltip(dot, Text::new(hint), tooltip::Position::Top))
            },
        )
        .into()
}
