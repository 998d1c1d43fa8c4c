use chrono::{DateTime, Utc};
use demand_core::{Mmsi, ShipType};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AisPosition {
    pub mmsi: Mmsi,
    pub msgtime: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub ship_type: Option<ShipType>,
    pub speed_over_ground: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<f64>,
    pub vessel_name: Option<String>,
    pub call_sign: Option<String>,
}

impl From<AisPosition> for demand_core::VesselPosition {
    fn from(value: AisPosition) -> Self {
        demand_core::VesselPosition {
            latitude: value.latitude,
            longitude: value.longitude,
            mmsi: value.mmsi,
            msgtime: value.msgtime,
            ship_type: value.ship_type,
            speed_over_ground: value.speed_over_ground,
            course_over_ground: value.course_over_ground,
            true_heading: value.true_heading,
            vessel_name: value.vessel_name,
            call_sign: value.call_sign,
        }
    }
}
