use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub backend: BackendConfig,
    pub form: FormDefaults,
    pub channels: ChannelConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
    pub vsync: bool,
}

/// Prediction backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub predict_path: String,
    pub request_timeout_seconds: u64,
}

/// Initial values of the five form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefaults {
    pub ax_g: f64,
    pub ay_g: f64,
    pub az_g: f64,
    pub vibration: f64,
    pub bending: f64,
}

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub task_channel_capacity: usize,
    pub result_channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            backend: BackendConfig::default(),
            form: FormDefaults::default(),
            channels: ChannelConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 560.0,
            title: "StructSense - Structural Health Prediction".to_string(),
            resizable: true,
            vsync: true,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            predict_path: "/predict".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            ax_g: 0.45,
            ay_g: 0.6,
            az_g: 0.9,
            vibration: 300.0,
            bending: 100.0,
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            task_channel_capacity: 16,
            result_channel_capacity: 16,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;

        let config: AppConfig = toml::from_str(&content).map_err(ConfigError::ParseError)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Window dimensions must be positive".to_string(),
            ));
        }

        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Backend base URL must not be empty".to_string(),
            ));
        }

        if !self.backend.predict_path.starts_with('/') {
            return Err(ConfigError::ValidationError(
                "Predict path must start with '/'".to_string(),
            ));
        }

        if self.backend.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Request timeout must be positive".to_string(),
            ));
        }

        if self.channels.task_channel_capacity == 0 || self.channels.result_channel_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "Channel capacities must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Full URL of the prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!(
            "{}{}",
            self.backend.base_url.trim_end_matches('/'),
            self.backend.predict_path
        )
    }
}

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Configuration manager.
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let config = AppConfig::load_from_file(path)?;
        Ok(Self { config })
    }

    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    pub fn get_config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    #[test]
    fn defaults_match_form_initial_values() {
        let config = AppConfig::default();
        assert_eq!(config.form.ax_g, 0.45);
        assert_eq!(config.form.ay_g, 0.6);
        assert_eq!(config.form.az_g, 0.9);
        assert_eq!(config.form.vibration, 300.0);
        assert_eq!(config.form.bending, 100.0);
        config.validate().expect("default config is valid");
    }

    #[test]
    fn predict_url_joins_base_and_path() {
        let mut config = AppConfig::default();
        config.backend.base_url = "http://backend:5000/".to_string();
        assert_eq!(config.predict_url(), "http://backend:5000/predict");

        config.backend.base_url = "http://backend:5000".to_string();
        assert_eq!(config.predict_url(), "http://backend:5000/predict");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.backend.request_timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.backend.base_url = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.backend.predict_path = "predict".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.channels.task_channel_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_round_trip_preserves_backend_section() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).expect("serialize config");
        let parsed: AppConfig = toml::from_str(&text).expect("parse config");
        assert_eq!(parsed.backend.base_url, config.backend.base_url);
        assert_eq!(parsed.backend.predict_path, "/predict");
        assert_eq!(parsed.channels.task_channel_capacity, 16);
    }
}
