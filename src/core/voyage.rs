use crate::core::{GeoCoordinate, PortLocator, PortRole, TravelTime, VoyageRequest, VoyageResult};
use crate::utils::error::{MaritimeError, Result};
use std::time::Duration;

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Great-circle distance between two points in nautical miles (haversine).
pub fn compute_distance(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let d_phi = (b.latitude() - a.latitude()).to_radians();
    let d_lambda = (b.longitude() - a.longitude()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // rounding can push h just past 1.0 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_NM * c
}

pub fn estimate_time(distance_nm: f64, speed_knots: f64) -> Result<TravelTime> {
    if !speed_knots.is_finite() || speed_knots <= 0.0 {
        return Err(MaritimeError::InvalidSpeed { speed: speed_knots });
    }
    let hours = distance_nm / speed_knots;
    Ok(TravelTime {
        hours,
        days: hours / 24.0,
    })
}

pub struct VoyageEstimator<L: PortLocator> {
    locator: L,
    lookup_timeout: Duration,
}

impl<L: PortLocator> VoyageEstimator<L> {
    pub fn new(locator: L) -> Self {
        Self::with_timeout(locator, DEFAULT_LOOKUP_TIMEOUT)
    }

    pub fn with_timeout(locator: L, lookup_timeout: Duration) -> Self {
        Self {
            locator,
            lookup_timeout,
        }
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    /// Distance and duration for coordinates that are already known.
    pub fn estimate(&self, request: &VoyageRequest) -> Result<VoyageResult> {
        let distance_nm = compute_distance(&request.source, &request.destination);
        let time = estimate_time(distance_nm, request.speed_knots)?;
        Ok(VoyageResult {
            distance_nm,
            duration_hours: time.hours,
            duration_days: time.days,
        })
    }

    /// Resolves both port names and estimates the voyage between them.
    ///
    /// Speed is checked before any lookup. Both ports are looked up even when
    /// the first is missing so the error can name every port that failed.
    pub async fn estimate_voyage(
        &self,
        source_name: &str,
        dest_name: &str,
        speed_knots: f64,
    ) -> Result<VoyageResult> {
        estimate_time(0.0, speed_knots)?;

        let source = self.resolve(source_name).await?;
        let destination = self.resolve(dest_name).await?;

        let (source, destination) = match (source, destination) {
            (Some(s), Some(d)) => (s, d),
            (None, Some(_)) => {
                return Err(MaritimeError::PortNotFound {
                    which: PortRole::Source,
                    name: source_name.to_string(),
                })
            }
            (Some(_), None) => {
                return Err(MaritimeError::PortNotFound {
                    which: PortRole::Destination,
                    name: dest_name.to_string(),
                })
            }
            (None, None) => {
                return Err(MaritimeError::PortNotFound {
                    which: PortRole::Both,
                    name: format!("{}, {}", source_name, dest_name),
                })
            }
        };

        tracing::debug!(
            "Resolved {} -> {} and {} -> {}",
            source_name,
            source,
            dest_name,
            destination
        );

        let result = self.estimate(&VoyageRequest {
            source,
            destination,
            speed_knots,
        })?;

        tracing::info!(
            "Voyage {} -> {}: {:.1} nm, {:.1} h at {} kn",
            source_name,
            dest_name,
            result.distance_nm,
            result.duration_hours,
            speed_knots
        );
        Ok(result)
    }

    async fn resolve(&self, name: &str) -> Result<Option<GeoCoordinate>> {
        match tokio::time::timeout(self.lookup_timeout, self.locator.locate(name)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Port lookup for '{}' exceeded {:?}", name, self.lookup_timeout);
                Err(MaritimeError::Timeout {
                    operation: format!("port lookup for '{}'", name),
                    seconds: self.lookup_timeout.as_secs(),
                })
            }
        }
    }
}
