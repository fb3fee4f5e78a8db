use log::{error, info};

use crate::app::predict_app::PredictApp;
use crate::app::state::{Outcome, FAILURE_MESSAGE};
use crate::types::PredictionTask;

pub struct SubmissionHandler;

impl SubmissionHandler {
    /// Submit the current form. Refused while a request is in flight or any
    /// field does not parse; otherwise snapshots the reading and queues one
    /// task for the worker thread.
    pub fn submit(app: &mut PredictApp) {
        let Some(reading) = app.state.begin_submission() else {
            return;
        };

        match app.state.task_sender.try_send(PredictionTask::new(reading)) {
            Ok(()) => {
                info!("Prediction request queued: {:?}", reading);
            }
            Err(e) => {
                error!("Failed to queue prediction request: {}", e);
                app.state.outcome = Outcome::Failed(FAILURE_MESSAGE.to_string());
            }
        }
    }
}
