pub mod assistant;
pub mod voyage;

pub use crate::domain::model::{
    Answer, GeoCoordinate, PortRole, TravelTime, VoyageRequest, VoyageResult, WeatherReport,
};
pub use crate::domain::ports::{PortLocator, QuestionAnswerer, WeatherProvider};
pub use crate::utils::error::Result;
pub use voyage::{compute_distance, estimate_time, VoyageEstimator};
