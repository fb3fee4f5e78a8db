mod app;
mod client;
mod config;
mod logger;
mod types;

use std::env;
use std::thread;
use std::time::Duration;

use crossbeam_channel::bounded;
use dotenv::dotenv;
use eframe::egui;
use log::{error, info, warn};

use crate::app::PredictApp;
use crate::config::ConfigManager;

const CONFIG_FILE: &str = "config.toml";

fn main() {
    logger::init_logger();
    info!("Application starting");

    dotenv().ok();

    let mut config = match ConfigManager::load_from_file(CONFIG_FILE) {
        Ok(manager) => {
            info!("Loaded configuration from {}", CONFIG_FILE);
            manager
        }
        Err(e) => {
            warn!("No usable {} ({}), using defaults", CONFIG_FILE, e);
            ConfigManager::new()
        }
    };

    // Deployments where the backend lives elsewhere override the base URL
    // through the environment.
    if let Ok(base_url) = env::var("PREDICT_BASE_URL") {
        info!("Backend base URL overridden: {}", base_url);
        config.get_config_mut().backend.base_url = base_url;
    }

    if let Err(e) = config.get_config().validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let app_config = config.get_config().clone();

    let (task_sender, task_receiver) = bounded(app_config.channels.task_channel_capacity);
    let (result_sender, result_receiver) = bounded(app_config.channels.result_channel_capacity);

    let predict_url = app_config.predict_url();
    let request_timeout = Duration::from_secs(app_config.backend.request_timeout_seconds);
    let worker_handle = thread::spawn(move || {
        if let Err(e) =
            client::run_prediction_worker(task_receiver, result_sender, predict_url, request_timeout)
        {
            error!("Prediction worker failed: {}", e);
        }
    });

    let options = eframe::NativeOptions {
        vsync: app_config.window.vsync,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app_config.window.width, app_config.window.height])
            .with_resizable(app_config.window.resizable),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        &app_config.window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(PredictApp::new(config, task_sender, result_receiver)))),
    ) {
        error!("GUI failed: {}", e);
        std::process::exit(1);
    }

    // The GUI dropped its task sender on exit; the worker sees the channel
    // disconnect and returns on its own.
    info!("GUI closed, waiting for prediction worker to shut down");
    match worker_handle.join() {
        Ok(()) => info!("Prediction worker shut down gracefully"),
        Err(e) => error!("Prediction worker panicked: {:?}", e),
    }
}
