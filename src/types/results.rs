use serde::Deserialize;

/// Response body returned by the prediction endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct PredictionResponse {
    pub status: String,
}

/// Result of one prediction request, sent from the worker back to the UI.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub status: Option<String>,
    pub error: Option<String>,
}

impl PredictionResult {
    pub fn success(status: String) -> Self {
        Self {
            status: Some(status),
            error: None,
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            status: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{PredictionResponse, PredictionResult};

    #[test]
    fn response_deserializes_status_field() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"status":"stable"}"#).expect("deserialize response");
        assert_eq!(response.status, "stable");
    }

    #[test]
    fn response_tolerates_extra_fields() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"status":"DANGER","confidence":0.97}"#)
                .expect("deserialize response");
        assert_eq!(response.status, "DANGER");
    }

    #[test]
    fn result_constructors_are_mutually_exclusive() {
        let ok = PredictionResult::success("SAFE".to_string());
        assert!(ok.is_success());
        assert_eq!(ok.status.as_deref(), Some("SAFE"));
        assert!(ok.error.is_none());

        let err = PredictionResult::error("connection refused".to_string());
        assert!(!err.is_success());
        assert!(err.status.is_none());
    }
}
