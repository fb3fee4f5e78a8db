use eframe::egui;

use crate::app::handlers::SubmissionHandler;
use crate::app::predict_app::PredictApp;

pub fn render_form_panel(app: &mut PredictApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Structural Health Prediction");
        ui.add_space(12.0);

        let mut submit_requested = false;

        egui::Grid::new("sensor_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (label, hint, field) in app.state.form.fields_mut() {
                    ui.label(format!("{}:", label));

                    let valid = field.is_valid();
                    let mut edit = egui::TextEdit::singleline(field.buffer_mut())
                        .desired_width(140.0)
                        .hint_text(hint);
                    if !valid {
                        edit = edit.text_color(egui::Color32::from_rgb(150, 0, 0));
                    }

                    let response = ui.add(edit);
                    if response.changed() {
                        field.reparse();
                    }
                    // Enter submits from any field; same guarded path as the
                    // button, so it cannot start a second request.
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit_requested = true;
                    }

                    if !field.is_valid() {
                        ui.colored_label(egui::Color32::from_rgb(150, 0, 0), "not a number");
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);

        let button_label = app.state.outcome.submit_label();
        if ui
            .add_enabled(app.state.submit_enabled(), egui::Button::new(button_label))
            .clicked()
        {
            submit_requested = true;
        }

        if submit_requested {
            SubmissionHandler::submit(app);
        }

        ui.add_space(12.0);
        super::result_panel::render_result_panel(&app.state.outcome, ui);
    });
}
