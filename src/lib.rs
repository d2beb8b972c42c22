pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HuggingFaceClient, OpenWeatherClient, StaticPortLocator, Unconfigured};
pub use config::AppConfig;
pub use crate::core::{
    assistant::MaritimeAssistant, compute_distance, estimate_time, voyage::EARTH_RADIUS_NM,
    GeoCoordinate, PortLocator, PortRole, QuestionAnswerer, VoyageEstimator, VoyageResult,
    WeatherProvider,
};
pub use utils::error::{MaritimeError, Result};
