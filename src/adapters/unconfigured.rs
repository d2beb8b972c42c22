use crate::core::{Answer, GeoCoordinate, PortLocator, QuestionAnswerer, WeatherProvider, WeatherReport};
use crate::utils::error::{MaritimeError, Result};
use async_trait::async_trait;

/// Stands in for a service whose credentials are missing. Every call fails
/// with `MissingConfigError` naming the setting to fill in.
#[derive(Debug, Clone, Copy)]
pub struct Unconfigured {
    field: &'static str,
}

impl Unconfigured {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }

    fn error(&self) -> MaritimeError {
        MaritimeError::MissingConfigError {
            field: self.field.to_string(),
        }
    }
}

#[async_trait]
impl QuestionAnswerer for Unconfigured {
    async fn answer(&self, _question: &str) -> Result<Answer> {
        Err(self.error())
    }
}

#[async_trait]
impl WeatherProvider for Unconfigured {
    async fn current_weather(&self, _city: &str) -> Result<WeatherReport> {
        Err(self.error())
    }
}

#[async_trait]
impl PortLocator for Unconfigured {
    async fn locate(&self, _name: &str) -> Result<Option<GeoCoordinate>> {
        Err(self.error())
    }
}
