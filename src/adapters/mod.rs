// Adapters layer: concrete implementations of the domain ports for external services.

pub mod http;
pub mod huggingface;
pub mod openweather;
pub mod static_ports;
pub mod unconfigured;

pub use huggingface::HuggingFaceClient;
pub use openweather::OpenWeatherClient;
pub use static_ports::StaticPortLocator;
pub use unconfigured::Unconfigured;
