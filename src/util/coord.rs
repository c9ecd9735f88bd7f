use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]; values
/// outside those ranges produce undefined (non-crashing) encodings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<Position> for Point<f64> {
    fn from(p: Position) -> Self {
        Point::new(p.lon, p.lat)
    }
}

impl From<Point<f64>> for Position {
    fn from(p: Point<f64>) -> Self {
        Self { lat: p.y(), lon: p.x() }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

pub trait Coordinate {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

impl Coordinate for Position {
    fn lat(&self) -> f64 { self.lat }
    fn lon(&self) -> f64 { self.lon }
}

/// Tuples are read as (lat, lon).
impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 { self.0 }
    fn lon(&self) -> f64 { self.1 }
}

/// Points follow the geo-types convention: x is longitude, y is latitude.
impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 { self.y() }
    fn lon(&self) -> f64 { self.x() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (48.669, 22.445);
        assert_eq!(tuple.lat(), 48.669);
        assert_eq!(tuple.lon(), 22.445);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(22.445, 48.669);
        assert_eq!(point.lat(), 48.669);
        assert_eq!(point.lon(), 22.445);
    }

    #[test]
    fn test_position_point_roundtrip() {
        let pos = Position::new(48.669, 22.445);
        let point = Point::from(pos);
        assert_eq!(point.x(), 22.445);
        assert_eq!(point.y(), 48.669);
        assert_eq!(Position::from(point), pos);
    }

    #[test]
    fn test_position_serde_roundtrip() {
        let pos = Position::new(-10.669, 12.445);
        let json = serde_json::to_string(&pos).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
