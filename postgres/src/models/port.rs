use demand_core::Coordinates;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Port {
    pub name: String,
    pub unlocode: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Port> for demand_core::Port {
    fn from(value: Port) -> Self {
        demand_core::Port {
            name: value.name,
            unlocode: value.unlocode,
            coordinates: Coordinates {
                latitude: value.latitude,
                longitude: value.longitude,
            },
        }
    }
}
