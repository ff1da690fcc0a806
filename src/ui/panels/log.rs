// ZeroDecay - ui/panels/log.rs
//
// Log tab: read-only view of the lines forwarded by the logging layer.
// Uses `ScrollArea::show_rows` so only on-screen lines are laid out, and
// sticks to the bottom so new lines scroll into view.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the Log tab.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(format!("{} lines", state.log_lines.len()));
        if ui
            .add_enabled(!state.log_lines.is_empty(), egui::Button::new("Clear"))
            .clicked()
        {
            state.clear_log();
        }
    });
    ui.separator();

    let total = state.log_lines.len();
    if total == 0 {
        ui.centered_and_justified(|ui| {
            ui.label("No log messages yet.");
        });
        return;
    }

    egui::ScrollArea::both()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show_rows(ui, theme::LOG_ROW_HEIGHT, total, |ui, row_range| {
            for line in state.log_lines.range(row_range) {
                ui.add(egui::Label::new(egui::RichText::new(line).monospace()).extend());
            }
        });
}
