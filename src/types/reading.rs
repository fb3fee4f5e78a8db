use serde::Serialize;

/// One snapshot of the five structural sensor fields, serialized as the
/// request body of `POST /predict`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct SensorReading {
    pub ax_g: f64,
    pub ay_g: f64,
    pub az_g: f64,
    pub vibration: f64,
    pub bending: f64,
}

impl SensorReading {
    pub fn new(ax_g: f64, ay_g: f64, az_g: f64, vibration: f64, bending: f64) -> Self {
        Self {
            ax_g,
            ay_g,
            az_g,
            vibration,
            bending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SensorReading;

    #[test]
    fn serializes_with_exact_wire_field_names() {
        let reading = SensorReading::new(0.45, 0.6, 0.9, 300.0, 100.0);
        let body = serde_json::to_value(&reading).expect("serialize reading");

        assert_eq!(body["ax_g"], 0.45);
        assert_eq!(body["ay_g"], 0.6);
        assert_eq!(body["az_g"], 0.9);
        assert_eq!(body["vibration"], 300.0);
        assert_eq!(body["bending"], 100.0);
        assert_eq!(body.as_object().expect("json object").len(), 5);
    }
}
