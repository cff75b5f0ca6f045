use std::{collections::HashSet, io::Read, path::Path};

use serde::Deserialize;

use crate::{
    error::MapError,
    types::{Coordinates, LocationRecord},
};

/// One line of a locations CSV file.
#[derive(Debug, Deserialize)]
struct LocationRow {
    name: String,
    code: String,
    address: String,
    entries: String,
    exits: String,
    longitude: f64,
    latitude: f64,
}

impl From<LocationRow> for LocationRecord {
    fn from(row: LocationRow) -> Self {
        LocationRecord {
            name: row.name,
            code: row.code,
            address: row.address,
            entries: row.entries,
            exits: row.exits,
            coordinates: Coordinates::new(row.longitude, row.latitude),
        }
    }
}

/// The regions shown when no locations file is given.
pub fn seed_locations() -> Vec<LocationRecord> {
    vec![
        LocationRecord::new(
            "г. Москва, Москва",
            "77",
            "3601 глухонемых",
            "3481",
            "3616",
            Coordinates::new(37.6173, 55.7558),
        ),
        LocationRecord::new(
            "г. Майкоп, Республика Адыгея",
            "01",
            "3452 глухонемых",
            "3481",
            "3616",
            Coordinates::new(40.1047, 44.6076),
        ),
    ]
}

/// Loads locations from a CSV file with the header
/// `name,code,address,entries,exits,longitude,latitude`.
pub fn load_locations(path: &Path) -> Result<Vec<LocationRecord>, MapError> {
    let file = std::fs::File::open(path)?;
    read_locations(file)
}

/// Same as [`load_locations`] but from any reader.
///
/// Codes identify records on the map, so a repeated code is an error. So is
/// a file without records.
pub fn read_locations<R: Read>(reader: R) -> Result<Vec<LocationRecord>, MapError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for row in csv_reader.deserialize::<LocationRow>() {
        let record = LocationRecord::from(row?);
        if !seen.insert(record.code.clone()) {
            return Err(MapError::DuplicateCode(record.code));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(MapError::EmptyLocations);
    }
    Ok(records)
}
