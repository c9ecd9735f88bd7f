use crate::core::constants::EARTH_RADIUS_KM;
use crate::util::coord::Position;
use geo::{Distance, HaversineMeasure, Point};

/// Great-circle distance between two positions in kilometres.
pub fn distance_km(a: Position, b: Position) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_KM).distance(Point::from(a), Point::from(b))
}

/// Latitude of the point on the `meridian_lon` longitude line closest to `p`,
/// in degrees.
///
/// The meridian is a great circle through the poles; the nearest point on it
/// satisfies `tan(lat) = tan(p.lat) / cos(p.lon - meridian_lon)`. Callers
/// keep the meridian within 90 degrees of longitude of `p`; beyond that the
/// projection falls on the far half of the circle.
pub fn closest_latitude_on_meridian(p: Position, meridian_lon: f64) -> f64 {
    let delta = (p.lon - meridian_lon).to_radians();
    (p.lat.to_radians().tan() / delta.cos()).atan().to_degrees()
}
