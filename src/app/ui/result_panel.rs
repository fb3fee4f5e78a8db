use eframe::egui;

use crate::app::state::Outcome;

/// Result and error regions below the form. Nothing is shown while idle or
/// loading; the button label already carries the loading state.
pub fn render_result_panel(outcome: &Outcome, ui: &mut egui::Ui) {
    match outcome {
        Outcome::Succeeded(message) => {
            ui.group(|ui| {
                ui.colored_label(egui::Color32::from_rgb(0, 120, 0), message);
            });
        }
        Outcome::Failed(message) => {
            ui.group(|ui| {
                ui.colored_label(egui::Color32::from_rgb(150, 0, 0), message);
            });
        }
        Outcome::Idle | Outcome::Loading => {}
    }
}
