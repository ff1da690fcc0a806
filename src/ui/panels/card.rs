// ZeroDecay - ui/panels/card.rs
//
// One file card: label, health squares, and optional action buttons, drawn
// into a rect the flow arrangement already chose. Geometry comes from
// `CardMetrics` so the drawing always matches the preferred size.

use std::sync::Arc;

use egui::{pos2, Galley, Rect, Sense, Vec2};

use crate::core::actions::CardAction;
use crate::core::model::Card;
use crate::core::sizing::CardMetrics;
use crate::ui::theme;

/// Draw `card` into `rect`. Returns the action whose button was clicked.
pub fn render(
    ui: &mut egui::Ui,
    rect: Rect,
    card: &Card,
    label: &Arc<Galley>,
    metrics: &CardMetrics,
    with_buttons: bool,
    dark_mode: bool,
) -> Option<CardAction> {
    let painter = ui.painter().clone();
    painter.rect_filled(rect, theme::CARD_ROUNDING, theme::card_fill(dark_mode));
    painter.rect_stroke(
        rect,
        theme::CARD_ROUNDING,
        theme::card_stroke(dark_mode),
        egui::StrokeKind::Inside,
    );

    let inner = rect.shrink(metrics.margin);

    let label_pos = pos2(inner.center().x - label.size().x / 2.0, inner.top());
    painter.galley(label_pos, Arc::clone(label), ui.visuals().strong_text_color());

    let squares_top = inner.top() + label.size().y + metrics.item_spacing;
    for (index, healthy) in card.copies.iter().enumerate() {
        let (dx, dy) = metrics.square_offset(index);
        let square = Rect::from_min_size(
            pos2(inner.left() + dx, squares_top + dy),
            Vec2::splat(metrics.square_size),
        );
        painter.rect_filled(square, theme::SQUARE_ROUNDING, theme::health_colour(*healthy));

        let state = if *healthy { "healthy" } else { "unhealthy" };
        ui.interact(square, ui.id().with(("copy", index)), Sense::hover())
            .on_hover_text(format!("Copy {}: {state}", index + 1));
    }

    if !with_buttons {
        return None;
    }

    let buttons_top =
        squares_top + metrics.squares_area(card.copy_count()).height + metrics.item_spacing;
    let mut clicked = None;
    for (slot, action) in CardAction::ALL.iter().enumerate() {
        let left = inner.left() + slot as f32 * (metrics.button_size + metrics.button_spacing);
        let button_rect =
            Rect::from_min_size(pos2(left, buttons_top), Vec2::splat(metrics.button_size));
        let response = ui
            .put(button_rect, egui::Button::new(action.glyph()))
            .on_hover_text(action.label());
        if response.clicked() {
            clicked = Some(*action);
        }
    }
    clicked
}
