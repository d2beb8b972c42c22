use crate::core::{GeoCoordinate, PortLocator};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

const DEFAULT_PORTS: &[(&str, f64, f64)] = &[
    ("Antwerp", 51.2194, 4.4025),
    ("Busan", 35.1028, 129.0403),
    ("Cape Town", -33.9062, 18.4294),
    ("Hamburg", 53.5511, 9.9937),
    ("Hong Kong", 22.2855, 114.1577),
    ("Jebel Ali", 25.0112, 55.0614),
    ("Lagos", 6.4541, 3.3947),
    ("Los Angeles", 33.7405, -118.2775),
    ("Mumbai", 18.9500, 72.8400),
    ("New York", 40.7128, -74.0060),
    ("Piraeus", 37.9420, 23.6465),
    ("Rotterdam", 51.9244, 4.4777),
    ("Santos", -23.9608, -46.3336),
    ("Shanghai", 31.2304, 121.4737),
    ("Singapore", 1.2644, 103.8200),
    ("Southampton", 50.9097, -1.4044),
    ("Sydney", -33.8688, 151.2093),
    ("Valparaiso", -33.0472, -71.6127),
    ("Vancouver", 49.2888, -123.1111),
    ("Yokohama", 35.4437, 139.6380),
];

/// In-memory port table, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StaticPortLocator {
    ports: HashMap<String, GeoCoordinate>,
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl StaticPortLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_ports() -> Self {
        let mut locator = Self::new();
        for &(name, lat, lon) in DEFAULT_PORTS {
            if let Ok(coordinate) = GeoCoordinate::new(lat, lon) {
                locator.insert(name, coordinate);
            }
        }
        locator
    }

    pub fn insert(&mut self, name: &str, coordinate: GeoCoordinate) {
        self.ports.insert(normalize(name), coordinate);
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

#[async_trait]
impl PortLocator for StaticPortLocator {
    async fn locate(&self, name: &str) -> Result<Option<GeoCoordinate>> {
        Ok(self.ports.get(&normalize(name)).copied())
    }
}
