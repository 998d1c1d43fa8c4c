use std::{fmt::Display, num::ParseIntError, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vessel-type codes the AIS feed reports for cargo carriers.
pub const CARGO_SHIP_TYPES: [ShipType; 6] = [
    ShipType(70),
    ShipType(71),
    ShipType(72),
    ShipType(73),
    ShipType(74),
    ShipType(79),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct Mmsi(i32);

/// Categorical vessel-type code from the AIS static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct ShipType(i32);

/// A single AIS position report. Read-only to the analysis, alive only for
/// the duration of one query response.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub mmsi: Mmsi,
    pub msgtime: DateTime<Utc>,
    pub ship_type: Option<ShipType>,
    pub speed_over_ground: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<f64>,
    pub vessel_name: Option<String>,
    pub call_sign: Option<String>,
}

impl Mmsi {
    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl FromStr for Mmsi {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<Mmsi> for i32 {
    fn from(value: Mmsi) -> Self {
        value.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ShipType {
    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for ShipType {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Display for ShipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "test")]
mod test {
    use chrono::{DateTime, Utc};
    use rand::random;

    use super::*;

    impl Mmsi {
        pub fn test_new(mmsi: i32) -> Self {
            Self(mmsi)
        }
    }

    impl VesselPosition {
        pub fn test_default(mmsi: Mmsi, msgtime: DateTime<Utc>) -> VesselPosition {
            VesselPosition {
                latitude: random(),
                longitude: random(),
                mmsi,
                msgtime,
                ship_type: Some(ShipType(70)),
                speed_over_ground: Some(random()),
                course_over_ground: Some(random()),
                true_heading: Some(random()),
                vessel_name: Some("test_vessel".to_string()),
                call_sign: Some("WDE4178".to_string()),
            }
        }
    }
}
