use crate::domain::model::PortRole;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaritimeError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid speed: {speed} knots (must be greater than zero)")]
    InvalidSpeed { speed: f64 },

    #[error("Port not found ({which}): {name}")]
    PortNotFound { which: PortRole, name: String },

    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    #[error("Location not found: {query} ({message})")]
    LocationNotFound { query: String, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{service} API returned {status}: {body}")]
    ApiStatus {
        service: String,
        status: u16,
        body: String,
    },

    #[error("{service} error: {message}")]
    ServiceError { service: String, message: String },

    #[error("{service} returned an unexpected response: {message}")]
    ResponseFormat { service: String, message: String },

    #[error("{service} returned an empty response")]
    EmptyResponse { service: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, MaritimeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Network,
    ExternalService,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MaritimeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MaritimeError::InvalidCoordinate { .. }
            | MaritimeError::InvalidSpeed { .. }
            | MaritimeError::ValidationError { .. } => ErrorCategory::Input,
            MaritimeError::PortNotFound { .. } | MaritimeError::LocationNotFound { .. } => {
                ErrorCategory::Lookup
            }
            MaritimeError::Timeout { .. } | MaritimeError::ApiError(_) => ErrorCategory::Network,
            MaritimeError::ApiStatus { .. }
            | MaritimeError::ServiceError { .. }
            | MaritimeError::ResponseFormat { .. }
            | MaritimeError::EmptyResponse { .. }
            | MaritimeError::SerializationError(_) => ErrorCategory::ExternalService,
            MaritimeError::ConfigError { .. }
            | MaritimeError::MissingConfigError { .. }
            | MaritimeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MaritimeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            _ if self.is_retryable() => ErrorSeverity::Medium,
            ErrorCategory::Input
            | ErrorCategory::Lookup
            | ErrorCategory::Network
            | ErrorCategory::ExternalService => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether the caller may reasonably try the same call again.
    pub fn is_retryable(&self) -> bool {
        match self {
            MaritimeError::Timeout { .. } | MaritimeError::EmptyResponse { .. } => true,
            MaritimeError::ApiError(e) => e.is_timeout() || e.is_connect(),
            // 503 is what the inference API answers while a model is loading
            MaritimeError::ApiStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MaritimeError::InvalidCoordinate { latitude, longitude } => format!(
                "Coordinates ({}, {}) are outside the valid latitude/longitude range",
                latitude, longitude
            ),
            MaritimeError::InvalidSpeed { speed } => {
                format!("Speed must be greater than zero knots (got {})", speed)
            }
            MaritimeError::PortNotFound { which, name } => match which {
                PortRole::Both => format!("Neither port could be found: {}", name),
                _ => format!("Could not find the {} port '{}'", which, name),
            },
            MaritimeError::Timeout { operation, .. } => {
                format!("Request timed out ({}). Try again in a few seconds.", operation)
            }
            MaritimeError::LocationNotFound { message, .. } => format!("Error: {}", message),
            MaritimeError::ApiStatus {
                service, status, ..
            } => format!("{} API returned {}", service, status),
            MaritimeError::ServiceError { service, message } => {
                format!("{} error: {}", service, message)
            }
            MaritimeError::ResponseFormat { service, .. } => {
                format!("{} returned an invalid response. Try again.", service)
            }
            MaritimeError::EmptyResponse { service } => {
                format!("{} returned an empty response. Try again.", service)
            }
            MaritimeError::ValidationError { message } => message.clone(),
            MaritimeError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MaritimeError::InvalidCoordinate { .. } => {
                "Use latitude within [-90, 90] and longitude within [-180, 180]"
            }
            MaritimeError::InvalidSpeed { .. } => "Pass a positive speed with --speed",
            MaritimeError::PortNotFound { .. } | MaritimeError::LocationNotFound { .. } => {
                "Check the spelling or try the nearest larger city name"
            }
            MaritimeError::Timeout { .. } => {
                "Retry, or raise the timeout_seconds setting in the config file"
            }
            MaritimeError::ApiError(_) => "Check your network connection and retry",
            MaritimeError::ApiStatus { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key in the config file or environment is valid"
            }
            MaritimeError::ApiStatus { .. }
            | MaritimeError::ServiceError { .. }
            | MaritimeError::ResponseFormat { .. }
            | MaritimeError::EmptyResponse { .. }
            | MaritimeError::SerializationError(_) => {
                "The external service may be busy; try again in a few seconds"
            }
            MaritimeError::MissingConfigError { .. } => {
                "Set HF_API_KEY / WEATHER_KEY or add the key to maritime.toml"
            }
            MaritimeError::ConfigError { .. } | MaritimeError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
            MaritimeError::ValidationError { .. } => "Provide a non-empty value",
            MaritimeError::IoError(_) => "Check file paths and permissions",
        }
    }
}
