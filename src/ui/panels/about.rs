// ZeroDecay - ui/panels/about.rs
//
// Import / About tab: application identity and the (not yet available)
// import entry point.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the Import / About tab.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(constants::APP_NAME)
                .size(28.0)
                .strong(),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(format!("v{}", constants::APP_VERSION))
                .size(14.0)
                .weak(),
        );
    });

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(8.0);

    ui.vertical_centered(|ui| {
        ui.label("Keeps an eye on redundant copies of your files");
        ui.label("and shows the health of every copy at a glance.");
    });

    ui.add_space(16.0);

    ui.group(|ui| {
        ui.strong("Import");
        ui.label("Importing file lists is not available yet.");
        ui.add_enabled(false, egui::Button::new("Import\u{2026}"));
        ui.label(
            egui::RichText::new(format!("{} files currently monitored.", state.cards.len()))
                .small()
                .weak(),
        );
    });

    ui.add_space(16.0);

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
    });
}
