// ZeroDecay - gui.rs
//
// Top-level eframe::App implementation.
// Drains the log channel, draws the tab bar and status bar, and hands the
// central area to the active tab's panel.

use crate::app::state::{AppState, Tab};
use crate::ui;
use crate::util::constants;
use crate::util::logging::LogReceiver;

/// The ZeroDecay application.
pub struct ZeroDecayApp {
    pub state: AppState,
    pub log_receiver: LogReceiver,
}

impl ZeroDecayApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, log_receiver: LogReceiver) -> Self {
        Self {
            state,
            log_receiver,
        }
    }
}

impl eframe::App for ZeroDecayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull in lines logged since the last frame (from any thread).
        for line in self.log_receiver.drain() {
            self.state.append_line(line);
        }
        // Keep polling so lines logged while idle still show up.
        ctx.request_repaint_after(std::time::Duration::from_millis(
            constants::LOG_POLL_INTERVAL_MS,
        ));

        // Tab bar
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.state.active_tab, tab, tab.label());
                }
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.cards.len();
                    let visible = self.state.visible_count();
                    ui.label(format!("{visible}/{total} files"));
                });
            });
        });

        // Central panel (active tab)
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Monitoring => ui::panels::monitoring::render(ui, &mut self.state),
            Tab::Settings => ui::panels::settings::render(ui, &mut self.state),
            Tab::Log => ui::panels::log::render(ui, &mut self.state),
            Tab::ImportAbout => ui::panels::about::render(ui, &self.state),
        });
    }
}
