// Domain layer: value types and the capability traits the services sit behind.

pub mod model;
pub mod ports;
