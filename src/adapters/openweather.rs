use crate::adapters::http::{build_client, map_request_error, truncate_body};
use crate::config::OpenWeatherConfig;
use crate::core::{GeoCoordinate, PortLocator, WeatherProvider, WeatherReport};
use crate::utils::error::{MaritimeError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

const SERVICE: &str = "OpenWeather";

/// OpenWeather client serving both current weather and geocoding.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingHit {
    name: String,
    lat: f64,
    lon: f64,
    country: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(config: OpenWeatherConfig) -> Result<Self> {
        let api_key = config.api_key()?.to_string();
        let client = build_client(config.timeout())?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)], operation: &str) -> Result<(u16, String)> {
        let url = self.endpoint(path);
        tracing::debug!("GET {} ({})", url, operation);

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| map_request_error(e, operation, self.config.timeout()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_request_error(e, operation, self.config.timeout()))?;
        tracing::debug!("{} responded {} ({} bytes)", SERVICE, status, body.len());
        Ok((status, body))
    }
}

/// `cod` comes back as a number on success and as a string on errors.
fn response_code(data: &Value) -> Option<i64> {
    match data.get("cod")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn missing(field: &str) -> MaritimeError {
    MaritimeError::ResponseFormat {
        service: SERVICE.to_string(),
        message: format!("missing field {}", field),
    }
}

pub(crate) fn parse_weather(city: &str, status: u16, body: &str) -> Result<WeatherReport> {
    let data: Value = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(_) if !(200..300).contains(&status) => {
            return Err(MaritimeError::ApiStatus {
                service: SERVICE.to_string(),
                status,
                body: truncate_body(body),
            })
        }
        Err(e) => {
            return Err(MaritimeError::ResponseFormat {
                service: SERVICE.to_string(),
                message: e.to_string(),
            })
        }
    };

    let code = response_code(&data).unwrap_or(i64::from(status));
    if code != 200 {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("City not found")
            .to_string();
        return Err(if code == 404 {
            MaritimeError::LocationNotFound {
                query: city.to_string(),
                message,
            }
        } else {
            MaritimeError::ApiStatus {
                service: SERVICE.to_string(),
                status: u16::try_from(code).unwrap_or(status),
                body: message,
            }
        });
    }

    let temperature_c = data
        .pointer("/main/temp")
        .and_then(Value::as_f64)
        .ok_or_else(|| missing("main.temp"))?;
    let condition = data
        .pointer("/weather/0/description")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("weather[0].description"))?;
    let wind_speed_mps = data
        .pointer("/wind/speed")
        .and_then(Value::as_f64)
        .ok_or_else(|| missing("wind.speed"))?;
    let humidity_pct = data
        .pointer("/main/humidity")
        .and_then(Value::as_u64)
        .and_then(|h| u8::try_from(h).ok());
    let observed_at = data
        .get("dt")
        .and_then(Value::as_i64)
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0));

    Ok(WeatherReport {
        location: city.to_string(),
        temperature_c,
        condition: capitalize(condition),
        wind_speed_mps,
        humidity_pct,
        observed_at,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport> {
        let (status, body) = self
            .get(
                "/data/2.5/weather",
                &[("q", city), ("units", self.config.units.as_str())],
                "weather lookup",
            )
            .await?;
        let report = parse_weather(city, status, &body)?;
        tracing::info!(
            "Weather for {}: {} °C, {}",
            city,
            report.temperature_c,
            report.condition
        );
        Ok(report)
    }
}

#[async_trait]
impl PortLocator for OpenWeatherClient {
    async fn locate(&self, name: &str) -> Result<Option<GeoCoordinate>> {
        let (status, body) = self
            .get(
                "/geo/1.0/direct",
                &[("q", name), ("limit", "1")],
                "geocoding lookup",
            )
            .await?;

        if !(200..300).contains(&status) {
            return Err(MaritimeError::ApiStatus {
                service: SERVICE.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        let hits: Vec<GeocodingHit> =
            serde_json::from_str(&body).map_err(|e| MaritimeError::ResponseFormat {
                service: SERVICE.to_string(),
                message: e.to_string(),
            })?;

        match hits.into_iter().next() {
            Some(hit) => {
                tracing::debug!(
                    "Geocoded '{}' to {} ({}) at {}, {}",
                    name,
                    hit.name,
                    hit.country.as_deref().unwrap_or("?"),
                    hit.lat,
                    hit.lon
                );
                GeoCoordinate::new(hit.lat, hit.lon).map(Some)
            }
            None => {
                tracing::debug!("No geocoding result for '{}'", name);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weather_success() {
        let body = serde_json::json!({
            "cod": 200,
            "dt": 1_700_000_000,
            "main": {"temp": 14.3, "humidity": 77},
            "weather": [{"description": "broken clouds"}],
            "wind": {"speed": 7.7}
        })
        .to_string();

        let report = parse_weather("Rotterdam", 200, &body).unwrap();
        assert_eq!(report.temperature_c, 14.3);
        assert_eq!(report.condition, "Broken clouds");
        assert_eq!(report.wind_speed_mps, 7.7);
        assert_eq!(report.humidity_pct, Some(77));
        assert_eq!(report.observed_at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_parse_weather_string_code_not_found() {
        let body = r#"{"cod": "404", "message": "city not found"}"#;
        match parse_weather("Atlantis", 404, body) {
            Err(MaritimeError::LocationNotFound { query, message }) => {
                assert_eq!(query, "Atlantis");
                assert_eq!(message, "city not found");
            }
            other => panic!("expected LocationNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_weather_other_error_code() {
        let body = r#"{"cod": 401, "message": "Invalid API key"}"#;
        match parse_weather("Oslo", 401, body) {
            Err(MaritimeError::ApiStatus { status, body, .. }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "Invalid API key");
            }
            other => panic!("expected ApiStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_weather_missing_fields() {
        let body = r#"{"cod": 200, "main": {"temp": 3.0}}"#;
        assert!(matches!(
            parse_weather("Tromsø", 200, body),
            Err(MaritimeError::ResponseFormat { .. })
        ));
    }

    #[test]
    fn test_parse_weather_non_json_error_page() {
        assert!(matches!(
            parse_weather("Oslo", 502, "<html>Bad Gateway</html>"),
            Err(MaritimeError::ApiStatus { status: 502, .. })
        ));
        assert!(matches!(
            parse_weather("Oslo", 200, "not json"),
            Err(MaritimeError::ResponseFormat { .. })
        ));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("light rain"), "Light rain");
        assert_eq!(capitalize("FOG"), "Fog");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = OpenWeatherClient::new(OpenWeatherConfig::default()).unwrap_err();
        assert!(matches!(err, MaritimeError::MissingConfigError { .. }));
    }
}
