use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};
use reqwest::Client;

use crate::types::{PredictionResponse, PredictionResult, PredictionTask, SensorReading};

/// HTTP client for the prediction backend.
pub struct PredictionClient {
    http: Client,
    predict_url: String,
}

impl PredictionClient {
    pub fn new(predict_url: String, request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(request_timeout).build()?;
        Ok(Self { http, predict_url })
    }

    /// Send one reading to the backend and decode its response.
    ///
    /// A transport failure, a non-success HTTP status and a malformed body
    /// all come back as the same error type; the caller decides how much of
    /// the cause to surface.
    pub async fn predict(&self, reading: &SensorReading) -> Result<PredictionResponse, reqwest::Error> {
        debug!("POST {} with {:?}", self.predict_url, reading);

        self.http
            .post(&self.predict_url)
            .json(reading)
            .send()
            .await?
            .error_for_status()?
            .json::<PredictionResponse>()
            .await
    }
}

/// Prediction worker loop. Runs on its own thread and owns a current-thread
/// tokio runtime; the UI communicates with it exclusively over channels.
///
/// One task in, one result out. The loop ends when the task channel
/// disconnects (GUI closed) or when no one is listening for results anymore.
pub fn run_prediction_worker(
    task_receiver: Receiver<PredictionTask>,
    result_sender: Sender<PredictionResult>,
    predict_url: String,
    request_timeout: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let client = PredictionClient::new(predict_url, request_timeout)?;

    for task in task_receiver.iter() {
        let result = match runtime.block_on(client.predict(&task.reading)) {
            Ok(response) => PredictionResult::success(response.status),
            Err(e) => PredictionResult::error(e.to_string()),
        };

        if result_sender.send(result).is_err() {
            info!("Result channel disconnected, prediction worker exiting");
            break;
        }
    }

    info!("Prediction worker shut down");
    Ok(())
}
