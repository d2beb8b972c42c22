use crate::core::{
    Answer, PortLocator, QuestionAnswerer, VoyageEstimator, VoyageResult, WeatherProvider,
    WeatherReport,
};
use crate::utils::error::Result;
use crate::utils::validation::require_text;

/// Front door for the three assistant features: Q&A, weather and voyages.
pub struct MaritimeAssistant<Q, W, L>
where
    Q: QuestionAnswerer,
    W: WeatherProvider,
    L: PortLocator,
{
    answerer: Q,
    weather: W,
    estimator: VoyageEstimator<L>,
}

impl<Q, W, L> MaritimeAssistant<Q, W, L>
where
    Q: QuestionAnswerer,
    W: WeatherProvider,
    L: PortLocator,
{
    pub fn new(answerer: Q, weather: W, estimator: VoyageEstimator<L>) -> Self {
        Self {
            answerer,
            weather,
            estimator,
        }
    }

    pub async fn ask(&self, question: &str) -> Result<Answer> {
        let question = require_text(question, "Please enter a question.")?;
        tracing::debug!("Asking: {}", question);
        let answer = self.answerer.answer(&question).await?;
        tracing::info!("Answer received from {} ({} chars)", answer.model, answer.text.len());
        Ok(answer)
    }

    pub async fn weather(&self, city: &str) -> Result<WeatherReport> {
        let city = require_text(city, "Please enter a city name.")?;
        tracing::debug!("Fetching weather for {}", city);
        self.weather.current_weather(&city).await
    }

    pub async fn voyage(&self, from: &str, to: &str, speed_knots: f64) -> Result<VoyageResult> {
        let from = require_text(from, "Please enter a source port.")?;
        let to = require_text(to, "Please enter a destination port.")?;
        self.estimator.estimate_voyage(&from, &to, speed_knots).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoCoordinate;
    use crate::utils::error::MaritimeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct EchoAnswerer {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl QuestionAnswerer for EchoAnswerer {
        async fn answer(&self, question: &str) -> Result<Answer> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Answer {
                text: format!("echo: {}", question),
                model: "echo".to_string(),
            })
        }
    }

    struct FixedWeather;

    #[async_trait]
    impl WeatherProvider for FixedWeather {
        async fn current_weather(&self, city: &str) -> Result<WeatherReport> {
            Ok(WeatherReport {
                location: city.to_string(),
                temperature_c: 18.0,
                condition: "Clear sky".to_string(),
                wind_speed_mps: 3.1,
                humidity_pct: None,
                observed_at: None,
            })
        }
    }

    struct OnePort;

    #[async_trait]
    impl PortLocator for OnePort {
        async fn locate(&self, name: &str) -> Result<Option<GeoCoordinate>> {
            if name == "Piraeus" {
                Ok(Some(GeoCoordinate::new(37.942, 23.6465)?))
            } else {
                Ok(None)
            }
        }
    }

    fn assistant(answerer: EchoAnswerer) -> MaritimeAssistant<EchoAnswerer, FixedWeather, OnePort> {
        MaritimeAssistant::new(answerer, FixedWeather, VoyageEstimator::new(OnePort))
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected_without_calling_service() {
        let answerer = EchoAnswerer::default();
        let calls = answerer.calls.clone();
        let assistant = assistant(answerer);

        let err = assistant.ask("   ").await.unwrap_err();
        assert_eq!(err.user_friendly_message(), "Please enter a question.");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_question_is_trimmed() {
        let assistant = assistant(EchoAnswerer::default());
        let answer = assistant.ask("  What is a knot?\n").await.unwrap();
        assert_eq!(answer.text, "echo: What is a knot?");
    }

    #[tokio::test]
    async fn test_weather_requires_city() {
        let assistant = assistant(EchoAnswerer::default());
        assert!(matches!(
            assistant.weather("").await,
            Err(MaritimeError::ValidationError { .. })
        ));
        let report = assistant.weather(" Oslo ").await.unwrap();
        assert_eq!(report.location, "Oslo");
    }

    #[tokio::test]
    async fn test_voyage_uses_estimator() {
        let assistant = assistant(EchoAnswerer::default());
        let result = assistant.voyage("Piraeus", "Piraeus", 12.0).await.unwrap();
        assert_eq!(result.distance_nm, 0.0);

        assert!(matches!(
            assistant.voyage("Piraeus", "Nowhere", 12.0).await,
            Err(MaritimeError::PortNotFound { .. })
        ));
    }
}
