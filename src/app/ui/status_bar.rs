use eframe::egui;

use crate::app::predict_app::PredictApp;
use crate::app::state::Outcome;

pub fn render_status_bar(app: &mut PredictApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("status_bar")
        .min_height(32.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Status:");

                let (status_text, status_color) = match &app.state.outcome {
                    Outcome::Idle => ("Idle", egui::Color32::from_rgb(100, 100, 100)),
                    Outcome::Loading => ("Predicting", egui::Color32::from_rgb(255, 165, 0)),
                    Outcome::Succeeded(_) => ("Done", egui::Color32::from_rgb(0, 150, 0)),
                    Outcome::Failed(_) => ("Error", egui::Color32::from_rgb(150, 0, 0)),
                };

                ui.colored_label(status_color, status_text);

                ui.separator();
                ui.label(format!("Backend: {}", app.config.get_config().predict_url()));
            });
            ui.add_space(4.0);
        });
}
