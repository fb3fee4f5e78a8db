use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::{egui, Frame};
use log::{error, info};

use crate::config::ConfigManager;
use crate::types::{PredictionResult, PredictionTask};

use super::state::{AppState, Outcome};

pub struct PredictApp {
    pub state: AppState,
    pub config: ConfigManager,
}

impl PredictApp {
    pub fn new(
        config: ConfigManager,
        task_sender: Sender<PredictionTask>,
        result_receiver: Receiver<PredictionResult>,
    ) -> Self {
        let state = AppState::new(&config.get_config().form, task_sender, result_receiver);

        info!(
            "Form ready, predictions go to {}",
            config.get_config().predict_url()
        );

        PredictApp { state, config }
    }
}

impl eframe::App for PredictApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.set_visuals(egui::Visuals::light());

        // Apply any finished request before drawing, so the frame that
        // receives the result already renders it.
        self.handle_prediction_results();

        crate::app::ui::render_status_bar(self, ctx);
        crate::app::ui::render_form_panel(self, ctx);

        // Keep frames coming while a request is in flight; the result must
        // surface without waiting for the next input event.
        if self.state.outcome.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(120));
        }
    }
}

impl PredictApp {
    pub(crate) fn handle_prediction_results(&mut self) {
        while let Ok(result) = self.state.result_receiver.try_recv() {
            if let Some(cause) = &result.error {
                // Diagnostics only; the user sees the fixed failure message.
                error!("Prediction request failed: {}", cause);
            } else if let Some(status) = &result.status {
                info!("Prediction received: {}", status);
            }

            self.state.outcome = Outcome::from_result(&result);
        }
    }
}
