use crate::utils::error::{MaritimeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe in decimal degrees.
///
/// Latitude is within [-90, 90] and longitude within [-180, 180]; the
/// constructor and serde both reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = MaritimeError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        GeoCoordinate::new(raw.latitude, raw.longitude)
    }
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        // NaN fails both range checks
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(MaritimeError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoyageRequest {
    pub source: GeoCoordinate,
    pub destination: GeoCoordinate,
    pub speed_knots: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelTime {
    pub hours: f64,
    pub days: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoyageResult {
    pub distance_nm: f64,
    pub duration_hours: f64,
    pub duration_days: f64,
}

/// Which end of a voyage a failed lookup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortRole {
    Source,
    Destination,
    Both,
}

impl fmt::Display for PortRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortRole::Source => write!(f, "source"),
            PortRole::Destination => write!(f, "destination"),
            PortRole::Both => write!(f, "both"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    pub condition: String,
    pub wind_speed_mps: f64,
    pub humidity_pct: Option<u8>,
    pub observed_at: Option<DateTime<Utc>>,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📍 Location: {}", self.location)?;
        writeln!(f, "🌡 Temperature: {} °C", self.temperature_c)?;
        writeln!(f, "🌤 Condition: {}", self.condition)?;
        write!(f, "💨 Wind Speed: {} m/s", self.wind_speed_mps)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds_are_inclusive() {
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
        assert!(GeoCoordinate::new(90.0001, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, -180.5).is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_coordinate_deserialize_validates() {
        let ok: GeoCoordinate =
            serde_json::from_str(r#"{"latitude": 51.9244, "longitude": 4.4777}"#).unwrap();
        assert_eq!(ok.latitude(), 51.9244);

        let bad = serde_json::from_str::<GeoCoordinate>(r#"{"latitude": 123.0, "longitude": 0.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_weather_report_display() {
        let report = WeatherReport {
            location: "Hamburg".to_string(),
            temperature_c: 12.5,
            condition: "Light rain".to_string(),
            wind_speed_mps: 6.2,
            humidity_pct: Some(81),
            observed_at: None,
        };
        assert_eq!(
            report.to_string(),
            "📍 Location: Hamburg\n🌡 Temperature: 12.5 °C\n🌤 Condition: Light rain\n💨 Wind Speed: 6.2 m/s"
        );
    }
}
