use walkers::Position;

/// Geographic coordinates in degrees, stored in (longitude, latitude) order.
///
/// Values are passed through to the map untouched; nothing here checks that
/// they fall inside the valid degree ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub fn to_position(self) -> Position {
        Position::from_lat_lon(self.latitude, self.longitude)
    }
}

/// A region shown on the map as a single marker.
///
/// Records are compared by `code` when deciding whether one is hovered or
/// selected, so codes must be unique within a loaded set.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub code: String,
    pub address: String,
    pub entries: String,
    pub exits: String,
    pub coordinates: Coordinates,
}

impl LocationRecord {
    pub fn new(
        name: &str,
        code: &str,
        address: &str,
        entries: &str,
        exits: &str,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            address: address.to_string(),
            entries: entries.to_string(),
            exits: exits.to_string(),
            coordinates,
        }
    }

    pub fn position(&self) -> Position {
        self.coordinates.to_position()
    }

    pub fn is(&self, code: Option<&str>) -> bool {
        code == Some(self.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_swaps_to_lat_lon() {
        let position = Coordinates::new(37.6173, 55.7558).to_position();
        assert_eq!(position.lat(), 55.7558);
        assert_eq!(position.lon(), 37.6173);
    }

    #[test]
    fn test_out_of_range_coordinates_pass_through() {
        let position = Coordinates::new(540.0, -123.0).to_position();
        assert_eq!(position.lon(), 540.0);
        assert_eq!(position.lat(), -123.0);
    }

    #[test]
    fn test_identity_is_by_code() {
        let record = LocationRecord::new("a", "77", "b", "1", "2", Coordinates::new(0.0, 0.0));
        let twin = LocationRecord {
            name: "other".to_string(),
            ..record.clone()
        };

        assert!(record.is(Some("77")));
        assert!(twin.is(Some(record.code.as_str())));
        assert!(!record.is(Some("01")));
        assert!(!record.is(None));
    }
}
