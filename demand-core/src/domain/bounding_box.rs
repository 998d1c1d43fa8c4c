#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Rectangular lat/lon region used as a coarse spatial filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl BoundingBox {
    /// Width and height are in decimal degrees, not nautical miles. Callers
    /// working in nautical distances must convert before calling. For
    /// non-negative extents the resulting box satisfies
    /// `lat_min <= lat_max` and `lon_min <= lon_max`.
    pub fn from_center(center: Coordinates, width: f64, height: f64) -> BoundingBox {
        BoundingBox {
            lat_min: center.latitude - height / 2.0,
            lat_max: center.latitude + height / 2.0,
            lon_min: center.longitude - width / 2.0,
            lon_max: center.longitude + width / 2.0,
        }
    }

    /// Both range checks are inclusive.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.lat_min
            && latitude <= self.lat_max
            && longitude >= self.lon_min
            && longitude <= self.lon_max
    }

    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }
}
