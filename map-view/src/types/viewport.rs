use walkers::Position;

pub const INITIAL_LAT: f64 = 55.7558;
pub const INITIAL_LON: f64 = 37.6173;
pub const INITIAL_ZOOM: f64 = 9.0;

/// Camera state over the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(latitude: f64, longitude: f64, zoom: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
        }
    }

    pub fn from_position(position: Position, zoom: f64) -> Self {
        Self::new(position.lat(), position.lon(), zoom)
    }

    pub fn center(&self) -> Position {
        Position::from_lat_lon(self.latitude, self.longitude)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(INITIAL_LAT, INITIAL_LON, INITIAL_ZOOM)
    }
}
