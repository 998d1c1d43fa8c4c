use chrono::{DateTime, TimeZone, Utc};
use demand_core::{InMemoryStore, Mmsi, Port, VesselPosition};

pub const LONG_BEACH: (f64, f64) = (33.75, -118.2);

pub fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, hour, minute, 0).unwrap()
}

pub fn cargo_position(
    mmsi: i32,
    msgtime: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
) -> VesselPosition {
    VesselPosition {
        latitude,
        longitude,
        ..VesselPosition::test_default(Mmsi::test_new(mmsi), msgtime)
    }
}

pub fn store() -> InMemoryStore {
    InMemoryStore::new().with_port(Port::test_default("Long Beach", LONG_BEACH.0, LONG_BEACH.1))
}
