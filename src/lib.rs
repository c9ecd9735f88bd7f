//! # nearhash
//!
//! Geohash encoding, cell navigation and radius-based proximity search.
//!
//! There are three main entry points.
//!
//! ### 1. `GeoHash` - Single Cell Operations
//!
//! ```
//! use nearhash::GeoHash;
//!
//! # fn main() -> Result<(), nearhash::GeoHashError> {
//! let hash = GeoHash::encode(&(48.669, 22.445), 5)?;
//! assert_eq!(hash.to_string(), "u2xuy");
//!
//! // Bottom-left corner and the four neighbouring cells.
//! println!("{}", hash.position());
//! assert_eq!(hash.right().left(), hash);
//!
//! let polygon = hash.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `nearby_geohashes` - Proximity Search
//!
//! All cells whose area comes within a radius (in km) of an origin, in
//! expanding-ring order starting with the origin's own cell:
//!
//! ```
//! use nearhash::nearby_geohashes;
//!
//! # fn main() -> Result<(), nearhash::GeoHashError> {
//! let cells = nearby_geohashes(&(0.7, 0.7), 120.0, 3)?;
//! assert_eq!(cells.len(), 9);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `NearbyCells` - Search Result Collection
//!
//! ```
//! use nearhash::NearbyCells;
//!
//! # fn main() -> Result<(), nearhash::GeoHashError> {
//! let cells = NearbyCells::search(&(0.7, 0.7), 80.0, 3)?;
//! assert_eq!(cells.len(), 5);
//! let polygons = cells.to_polygons();
//! # Ok(())
//! # }
//! ```
//!
//! Latitude and longitude wrap modularly at the grid edges during
//! navigation, on both axes. See [`GeoHash`] for the details of this
//! flat-torus behaviour near the poles.

pub mod api;
pub mod core;
pub mod util;

pub use api::{GeoHash, NearbyCells, Rectangle, nearby_geohashes};
pub use core::{
    BASE32_ALPHABET, EARTH_RADIUS_KM, MAX_PRECISION, axis_bit_widths,
    closest_latitude_on_meridian, distance_km,
};
pub use util::{Coordinate, GeoHashError, Position};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeoHashError> {
        let origin = (48.669, 22.445);

        let hash = GeoHash::encode(&origin, 8)?;
        assert_eq!(hash.to_string().len(), 8);
        assert_eq!(hash.precision(), 8);

        let rect = hash.rectangle();
        assert!(rect.bottom_left.lat <= origin.0);
        assert!(rect.top_right.lon > origin.1);

        let cells = NearbyCells::search(&origin, 25.0, 5)?;
        assert!(!cells.is_empty());
        assert!(cells.contains(&GeoHash::encode(&origin, 5)?));
        assert_eq!(cells.to_polygons().len(), cells.len());
        Ok(())
    }

    #[test]
    fn test_encode_accepts_points_and_positions() -> Result<(), GeoHashError> {
        let from_tuple = GeoHash::encode(&(48.669, 22.445), 5)?;
        let from_point = GeoHash::encode(&geo_types::Point::new(22.445, 48.669), 5)?;
        let from_position = GeoHash::encode(&Position::new(48.669, 22.445), 5)?;

        assert_eq!(from_tuple, from_point);
        assert_eq!(from_tuple, from_position);
        Ok(())
    }

    #[test]
    fn test_roundtrip_within_one_cell_width() -> Result<(), GeoHashError> {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let lat: f64 = rng.gen_range(-89.9..89.9);
            let lon: f64 = rng.gen_range(-179.9..179.9);
            let precision = rng.gen_range(1..=12);

            let hash = GeoHash::encode(&(lat, lon), precision)?;
            let (lat_width, lon_width) = axis_bit_widths(precision);
            let cell_lat = 180.0 / (1u64 << lat_width) as f64;
            let cell_lon = 360.0 / (1u64 << lon_width) as f64;

            let pos = hash.position();
            assert!(pos.lat <= lat && lat < pos.lat + cell_lat);
            assert!(pos.lon <= lon && lon < pos.lon + cell_lon);
        }
        Ok(())
    }

    #[test]
    fn test_nearby_radius_monotonicity() -> Result<(), GeoHashError> {
        let origin = (0.7, 0.7);

        let mut previous: HashSet<GeoHash> = HashSet::new();
        for radius in [0.0, 20.0, 60.0, 80.0, 120.0, 200.0] {
            let current: HashSet<GeoHash> =
                nearby_geohashes(&origin, radius, 3)?.into_iter().collect();
            assert!(previous.is_subset(&current), "radius {}", radius);
            previous = current;
        }
        Ok(())
    }

    #[test]
    fn test_nearby_origin_always_included() -> Result<(), GeoHashError> {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let origin = (rng.gen_range(-50.0..50.0), rng.gen_range(-100.0..100.0));
            let radius = rng.gen_range(0.0..30.0);
            let precision = rng.gen_range(4..=7);

            let cells = nearby_geohashes(&origin, radius, precision)?;
            assert_eq!(cells[0], GeoHash::encode(&origin, precision)?);
        }
        Ok(())
    }

    #[test]
    fn test_nearby_superset_of_brute_force() -> Result<(), GeoHashError> {
        let mut rng = StdRng::seed_from_u64(23);

        let lat: f64 = rng.gen_range(-50.0..50.0);
        let lon: f64 = rng.gen_range(-100.0..100.0);
        let origin = Position::new(lat, lon);
        let radius = rng.gen_range(5.0..30.0);
        let precision = rng.gen_range(4..=6);

        let result: HashSet<String> = nearby_geohashes(&origin, radius, precision)?
            .into_iter()
            .map(|h| h.to_string())
            .collect();

        // Sample a grid around the origin; every sampled point within the
        // radius must land in a cell the enumerator reported. Extra cells
        // just outside the radius are expected and fine.
        let step = 0.005;
        let span = 1.0;
        let steps = (2.0 * span / step) as i32;
        for y in 0..=steps {
            for x in 0..=steps {
                let p = Position::new(lat - span + y as f64 * step, lon - span + x as f64 * step);
                if distance_km(origin, p) <= radius {
                    let hash = GeoHash::encode(&p, precision)?.to_string();
                    assert!(result.contains(&hash), "missing {}", hash);
                }
            }
        }
        Ok(())
    }
}
