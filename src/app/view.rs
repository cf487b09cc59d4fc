// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The search panel is always rendered; the translation modal and the toast
//! overlay are stacked above it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::search_panel::{self, State as SearchPanelState};
use crate::ui::translation_modal::{self, State as ModalState};
use iced::widget::{stack, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search_panel: &'a SearchPanelState,
    pub modal: Option<&'a ModalState>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the search panel, the modal when open, and the toasts.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = search_panel::view(search_panel::ViewContext {
        i18n: ctx.i18n,
        state: ctx.search_panel,
    })
    .map(Message::SearchPanel);

    let base: Element<'_, Message> = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let content = match ctx.modal {
        Some(state) => translation_modal::view(
            base,
            translation_modal::ViewContext {
                i18n: ctx.i18n,
                state,
            },
            Message::Modal,
        ),
        None => base,
    };

    if !ctx.notifications.has_notifications() {
        return content;
    }

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
    stack![content, toasts].into()
}
