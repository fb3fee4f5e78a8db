use crate::types::SensorReading;

/// A unit of work queued from the UI to the prediction worker thread.
/// Exactly one result is sent back per task.
#[derive(Debug, Clone, Copy)]
pub struct PredictionTask {
    pub reading: SensorReading,
}

impl PredictionTask {
    pub fn new(reading: SensorReading) -> Self {
        Self { reading }
    }
}
