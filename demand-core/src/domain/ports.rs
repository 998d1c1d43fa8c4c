use crate::Coordinates;

/// A port reference record from the port reference dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    /// Exact name of the port as it appears in the reference dataset.
    pub name: String,
    /// UN/LOCODE of the port, for the entries that carry one.
    pub unlocode: Option<String>,
    pub coordinates: Coordinates,
}

#[cfg(feature = "test")]
mod test {
    use super::*;

    impl Port {
        pub fn test_default(name: &str, latitude: f64, longitude: f64) -> Port {
            Port {
                name: name.to_string(),
                unlocode: Some("USLGB".to_string()),
                coordinates: Coordinates {
                    latitude,
                    longitude,
                },
            }
        }
    }
}
