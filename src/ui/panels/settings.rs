// ZeroDecay - ui/panels/settings.rs
//
// Settings tab: effective configuration plus a few runtime-only toggles.
// Nothing here is written back to config.toml.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the Settings tab.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Settings");
    ui.label(
        egui::RichText::new("Changes apply to this session only.")
            .small()
            .weak(),
    );
    ui.separator();

    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Config file:");
            ui.label(egui::RichText::new(state.config_path.display().to_string()).monospace());
            ui.end_row();

            ui.label("Theme:");
            ui.horizontal(|ui| {
                let before = state.config.dark_mode;
                ui.radio_value(&mut state.config.dark_mode, true, "Dark");
                ui.radio_value(&mut state.config.dark_mode, false, "Light");
                if state.config.dark_mode != before {
                    theme::apply(ui.ctx(), state.config.dark_mode);
                    tracing::info!(dark = state.config.dark_mode, "Theme changed");
                }
            });
            ui.end_row();

            ui.label("Action buttons:");
            ui.checkbox(&mut state.config.show_action_buttons, "Show on every card");
            ui.end_row();

            ui.label("Card spacing:");
            ui.label(format!("{}", state.config.card_spacing));
            ui.end_row();

            ui.label("Panel margin:");
            ui.label(format!("{}", state.config.panel_margin));
            ui.end_row();

            ui.label("Log tab limit:");
            ui.label(format!("{} lines", state.config.log_max_lines));
            ui.end_row();

            ui.label("Debug mode:");
            ui.label(if state.debug_mode { "on" } else { "off" });
            ui.end_row();
        });

    ui.separator();

    if ui.button("Reload sample data").clicked() {
        state.reload_cards();
        state.status_message = format!("Reloaded {} files.", state.cards.len());
    }
}
