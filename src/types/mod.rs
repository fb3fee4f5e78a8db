pub mod reading;
pub mod results;
pub mod tasks;

pub use reading::SensorReading;
pub use results::{PredictionResponse, PredictionResult};
pub use tasks::PredictionTask;
