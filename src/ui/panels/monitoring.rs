// ZeroDecay - ui/panels/monitoring.rs
//
// Monitoring tab: search box plus a vertically scrolling flow of file cards.
//
// Every frame measures the card labels, computes preferred sizes, and runs
// the flow arrangement against the current scroll-area width, so resizes and
// filter changes never leave a stale layout behind.

use std::sync::Arc;

use egui::{vec2, FontId, Galley, Rect, RichText, Sense};

use crate::app::state::AppState;
use crate::core::actions::CardAction;
use crate::core::flow::{arrange, ArrangeMode, FlowBounds, FlowSpacing};
use crate::core::model::{Point, Size};
use crate::core::sizing::{preferred_size, CardMetrics};
use crate::ui::panels::card;
use crate::ui::theme;
use crate::util::constants;

/// Render the Monitoring tab.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let search = ui.add(
        egui::TextEdit::singleline(&mut state.search_text)
            .hint_text(constants::SEARCH_HINT)
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        state.apply_filter();
    }
    if state.filter.is_literal() {
        ui.label(
            RichText::new("Not a valid regular expression; matching the text literally.")
                .small()
                .weak(),
        );
    }

    ui.add_space(4.0);

    if state.cards.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No files are being monitored.");
        });
        return;
    }
    if state.visible_count() == 0 {
        ui.centered_and_justified(|ui| {
            ui.label("No files match the current search.");
        });
        return;
    }

    let metrics = CardMetrics::default();
    let with_buttons = state.config.show_action_buttons;
    let dark_mode = state.config.dark_mode;
    let mut clicked: Option<(usize, CardAction)> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let margin = state.config.panel_margin;
            let spacing = FlowSpacing::uniform(state.config.card_spacing);
            let full_width = ui.available_width();
            let text_colour = ui.visuals().strong_text_color();

            let labels: Vec<Arc<Galley>> = state
                .cards
                .iter()
                .map(|c| {
                    ui.fonts(|f| {
                        f.layout(
                            c.name.clone(),
                            FontId::proportional(theme::LABEL_FONT_SIZE),
                            text_colour,
                            metrics.label_wrap_width(),
                        )
                    })
                })
                .collect();
            let sizes: Vec<Size> = state
                .cards
                .iter()
                .zip(&labels)
                .map(|(c, g)| {
                    let label = Size::new(g.size().x, g.size().y);
                    preferred_size(c.copy_count(), label, &metrics, with_buttons)
                })
                .collect();

            let bounds = FlowBounds::new(
                Point::new(margin, margin),
                (full_width - 2.0 * margin).max(0.0),
            );
            let arrangement = arrange(&state.flow_items(&sizes), bounds, spacing, ArrangeMode::Place);

            let (panel, _) = ui.allocate_exact_size(
                vec2(full_width, arrangement.total_height + 2.0 * margin),
                Sense::hover(),
            );

            for &(index, pos) in &arrangement.positions {
                let size = sizes[index];
                let rect = Rect::from_min_size(
                    panel.min + vec2(pos.x, pos.y),
                    vec2(size.width, size.height),
                );
                if !ui.is_rect_visible(rect) {
                    continue;
                }
                let action = ui
                    .push_id(("card", index), |ui| {
                        card::render(
                            ui,
                            rect,
                            &state.cards[index],
                            &labels[index],
                            &metrics,
                            with_buttons,
                            dark_mode,
                        )
                    })
                    .inner;
                if let Some(action) = action {
                    clicked = Some((index, action));
                }
            }
        });

    if let Some((index, action)) = clicked {
        state.handle_action(index, action);
    }
}
