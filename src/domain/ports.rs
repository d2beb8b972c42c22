use crate::domain::model::{Answer, GeoCoordinate, WeatherReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a place name to coordinates. `Ok(None)` means the service
/// answered but knows no such place.
#[async_trait]
pub trait PortLocator: Send + Sync {
    async fn locate(&self, name: &str) -> Result<Option<GeoCoordinate>>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport>;
}

#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn answer(&self, question: &str) -> Result<Answer>;
}

#[async_trait]
impl<T: PortLocator + ?Sized> PortLocator for Box<T> {
    async fn locate(&self, name: &str) -> Result<Option<GeoCoordinate>> {
        (**self).locate(name).await
    }
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Box<T> {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport> {
        (**self).current_weather(city).await
    }
}

#[async_trait]
impl<T: QuestionAnswerer + ?Sized> QuestionAnswerer for Box<T> {
    async fn answer(&self, question: &str) -> Result<Answer> {
        (**self).answer(question).await
    }
}
