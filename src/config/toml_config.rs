use crate::utils::error::{MaritimeError, Result};
use crate::utils::validation::{validate_range, validate_required_field, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const HF_API_KEY_ENV: &str = "HF_API_KEY";
pub const WEATHER_KEY_ENV: &str = "WEATHER_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub huggingface: HuggingFaceConfig,
    pub openweather: OpenWeatherConfig,
    pub voyage: VoyageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HuggingFaceConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "distilgpt2".to_string(),
            base_url: "https://api-inference.huggingface.co".to_string(),
            // the hosted model may need this long to load on a cold start
            timeout_seconds: 60,
        }
    }
}

impl HuggingFaceConfig {
    pub fn api_key(&self) -> Result<&str> {
        validate_required_field("huggingface.api_key", &self.api_key).map(String::as_str)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenWeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub units: String,
    pub timeout_seconds: u64,
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "http://api.openweathermap.org".to_string(),
            units: "metric".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl OpenWeatherConfig {
    pub fn api_key(&self) -> Result<&str> {
        validate_required_field("openweather.api_key", &self.api_key).map(String::as_str)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoyageConfig {
    pub lookup_timeout_seconds: u64,
    pub default_speed_knots: f64,
}

impl Default for VoyageConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_seconds: 10,
            default_speed_knots: 15.0,
        }
    }
}

impl VoyageConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_seconds)
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MaritimeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when it exists, otherwise starts from defaults. Keys still
    /// missing afterwards are taken from `HF_API_KEY` / `WEATHER_KEY`.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = if path.as_ref().exists() {
            Self::from_file(&path)?
        } else {
            tracing::debug!(
                "No config file at {}, using defaults",
                path.as_ref().display()
            );
            Self::default()
        };
        config.apply_env_fallbacks();
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: AppConfig =
            toml::from_str(&processed_content).map_err(|e| MaritimeError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        // an unresolved ${VAR} is as good as no key at all
        for key in [
            &mut config.huggingface.api_key,
            &mut config.openweather.api_key,
        ] {
            if key.as_deref().is_some_and(|k| k.is_empty() || k.starts_with("${")) {
                *key = None;
            }
        }
        Ok(config)
    }

    /// 替換環境變數 (例如 ${HF_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MaritimeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_env_fallbacks(&mut self) {
        if self.huggingface.api_key.is_none() {
            self.huggingface.api_key = std::env::var(HF_API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
        if self.openweather.api_key.is_none() {
            self.openweather.api_key =
                std::env::var(WEATHER_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("huggingface.base_url", &self.huggingface.base_url)?;
        validate_url("openweather.base_url", &self.openweather.base_url)?;

        crate::utils::validation::validate_non_empty_string(
            "huggingface.model",
            &self.huggingface.model,
        )?;

        let valid_units = ["metric", "imperial", "standard"];
        if !valid_units.contains(&self.openweather.units.as_str()) {
            return Err(MaritimeError::InvalidConfigValueError {
                field: "openweather.units".to_string(),
                value: self.openweather.units.clone(),
                reason: format!("Unsupported units. Valid units: {}", valid_units.join(", ")),
            });
        }

        validate_range(
            "huggingface.timeout_seconds",
            self.huggingface.timeout_seconds,
            1,
            300,
        )?;
        validate_range(
            "openweather.timeout_seconds",
            self.openweather.timeout_seconds,
            1,
            300,
        )?;
        validate_range(
            "voyage.lookup_timeout_seconds",
            self.voyage.lookup_timeout_seconds,
            1,
            300,
        )?;

        let speed = self.voyage.default_speed_knots;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(MaritimeError::InvalidConfigValueError {
                field: "voyage.default_speed_knots".to_string(),
                value: speed.to_string(),
                reason: "Speed must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
