//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use workdeck_app::state::{AppState, HitAreas, HitRect};
use workdeck_app::CardDetails;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

fn hit_rect(rect: Rect) -> HitRect {
    HitRect::new(rect.x, rect.y, rect.width, rect.height)
}

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, records the clickable regions of this frame in
/// `state.hit_areas` so the next click can be routed.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);
    let mut hit_areas = HitAreas::default();

    frame.render_widget(
        widgets::MainHeader::new(state.project_name.as_deref(), icons)
            .connected(state.props.connected),
        areas.header,
    );

    let card = state.card.view(&state.props);
    frame.render_widget(
        widgets::ProjectCard::new(&card.details, icons)
            .project_name(state.project_name.as_deref())
            .menu_open(card.context_menu.is_some()),
        areas.card,
    );

    let trigger = layout::trigger_rect(areas.card);
    hit_areas.trigger = Some(hit_rect(trigger));
    if matches!(card.details, CardDetails::Placeholder { connected: false }) {
        hit_areas.connect_button = Some(hit_rect(layout::connect_button_rect(areas.card)));
    }

    let messages = state.conversation.snapshot();
    frame.render_widget(widgets::ConversationView::new(&messages), areas.conversation);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(menu) = &card.context_menu {
        let rect = layout::context_menu_rect(trigger, menu.items.len(), area);
        frame.render_widget(widgets::ContextMenu::new(menu, icons), rect);
        hit_areas.context_menu = Some(hit_rect(rect));
        hit_areas.menu_first_row = rect.y.saturating_add(1);
    }

    if card.connect_modal {
        let rect = layout::connect_modal_rect(area);
        widgets::ConnectModal::new(&state.connect_form, icons).render_over(
            area,
            rect,
            frame.buffer_mut(),
        );
        hit_areas.connect_modal = Some(hit_rect(rect));
        hit_areas.connect_modal_close = Some(hit_rect(layout::modal_close_rect(rect)));
    }

    let toasts = state.toasts.visible();
    if !toasts.is_empty() {
        let rect = layout::toast_rect(area, toasts.len());
        frame.render_widget(widgets::ToastStack::new(&toasts, icons), rect);
    }

    state.hit_areas = hit_areas;
}
