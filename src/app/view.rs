// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::deck::Deck;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::carousel_view::{self, ViewContext as CarouselViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub deck: &'a Deck,
    pub screen: &'a Screen,
    pub colors: &'a ColorScheme,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.screen {
        Screen::Presenting(presentation) => carousel_view::view(CarouselViewContext {
            i18n: ctx.i18n,
            deck: ctx.deck,
            surface: presentation.surface(),
            current: presentation.current_slide(),
            colors: ctx.colors,
        })
        .map(Message::from),
        Screen::Failed(error) => view_error(error, ctx.i18n, ctx.colors),
    };

    let mut column = Column::new();
    if let Some(key) = ctx.notice {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(ctx.colors.muted_text),
            )
            .padding([spacing::XXS, spacing::MD]),
        );
    }

    Container::new(column.push(body).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_error<'a>(error: &Error, i18n: &'a I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let detail = match error {
        Error::Carousel(carousel_error) => {
            i18n.tr_with_args(carousel_error.i18n_key(), &carousel_error.i18n_args())
        }
        other => i18n.tr(other.i18n_key()),
    };

    let panel = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("error-title"))
                .size(typography::SLIDE_BODY)
                .color(colors.error),
        )
        .push(Text::new(detail))
        .push(
            Text::new(error.to_string())
                .size(typography::CAPTION)
                .color(colors.muted_text),
        );

    Container::new(
        Container::new(panel)
            .padding(spacing::LG)
            .style(styles::container::error_panel(colors.error)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}
