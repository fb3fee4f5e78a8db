pub mod handlers;
pub mod predict_app;
pub mod state;
pub mod ui;

pub use predict_app::PredictApp;
