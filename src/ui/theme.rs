// ZeroDecay - ui/theme.rs
//
// Colour scheme, health colour mapping, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Fill of a health square.
pub fn health_colour(healthy: bool) -> Color32 {
    if healthy {
        Color32::from_rgb(76, 175, 80) // Green 500
    } else {
        Color32::from_rgb(244, 67, 54) // Red 500
    }
}

/// Card background, slightly lifted from the panel.
pub fn card_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(39, 39, 42) // Zinc 800
    } else {
        Color32::from_rgb(250, 250, 250) // Zinc 50
    }
}

/// Card border.
pub fn card_stroke(dark_mode: bool) -> egui::Stroke {
    let colour = if dark_mode {
        Color32::from_rgb(82, 82, 91) // Zinc 600
    } else {
        Color32::from_rgb(161, 161, 170) // Zinc 400
    };
    egui::Stroke::new(1.0, colour)
}

/// Apply the dark or light base visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

/// Layout constants.
pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const CARD_ROUNDING: f32 = 4.0;
pub const SQUARE_ROUNDING: f32 = 2.0;
pub const LOG_ROW_HEIGHT: f32 = 18.0;
