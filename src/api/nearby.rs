use crate::api::cell::{CellOffset, GeoHash, Rectangle};
use crate::core::sphere::{closest_latitude_on_meridian, distance_km};
use crate::util::coord::{Coordinate, Position};
use crate::util::error::GeoHashError;
use geo_types::Polygon;

/// Returns every cell at `precision` whose rectangle comes within
/// `radius_km` of `origin`.
///
/// The origin's own cell always comes first. The remaining cells are visited
/// ring by ring: for each Chebyshev radius 1, 2, 3, … the square ring around
/// the origin cell is walked counter-clockwise starting one cell to the
/// east, and a cell is kept when the minimum great-circle distance from the
/// origin to its rectangle is within `radius_km`. The walk stops after the
/// first ring that contributed nothing.
///
/// The empty-ring cutoff is a heuristic: rings move away from the origin
/// monotonically in grid steps, not in geodesic distance, so pathological
/// radius/precision combinations near the poles can miss far-flung cells.
/// No cap is placed on the output size; a radius much larger than the cell
/// size produces correspondingly many cells.
///
/// # Example
///
/// ```
/// use nearhash::nearby_geohashes;
///
/// # fn main() -> Result<(), nearhash::GeoHashError> {
/// let cells = nearby_geohashes(&(0.7, 0.7), 120.0, 3)?;
/// assert_eq!(cells.len(), 9);
/// assert_eq!(cells[0].to_string(), "s00");
/// # Ok(())
/// # }
/// ```
pub fn nearby_geohashes(
    origin: &impl Coordinate,
    radius_km: f64,
    precision: u32,
) -> Result<Vec<GeoHash>, GeoHashError> {
    let origin = Position::new(origin.lat(), origin.lon());
    let origin_hash = GeoHash::encode(&origin, precision)?;

    let mut result = vec![origin_hash];

    for ring in 1.. {
        let mut productive = false;

        let mut next = Some(CellOffset { lat: 0, lon: ring });
        while let Some(offset) = next {
            let candidate = origin_hash.add_offset(offset);

            if min_distance_to_cell(origin, &candidate) <= radius_km {
                productive = true;
                result.push(candidate);
            }

            next = next_ring_offset(offset, ring);
        }

        if !productive {
            break;
        }
    }

    Ok(result)
}

/// An ordered collection of cells returned by a proximity search.
///
/// Wraps the sequence produced by [`nearby_geohashes`], preserving its
/// spiral ordering.
///
/// # Example
///
/// ```
/// use nearhash::NearbyCells;
///
/// # fn main() -> Result<(), nearhash::GeoHashError> {
/// let cells = NearbyCells::search(&(0.7, 0.7), 80.0, 3)?;
/// assert_eq!(cells.len(), 5);
/// for cell in cells.iter() {
///     println!("{}", cell);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NearbyCells {
    cells: Vec<GeoHash>,
    precision: u32,
}

impl NearbyCells {
    pub fn search(
        origin: &impl Coordinate,
        radius_km: f64,
        precision: u32,
    ) -> Result<Self, GeoHashError> {
        let cells = nearby_geohashes(origin, radius_km, precision)?;
        Ok(Self { cells, precision })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn hashes(&self) -> &[GeoHash] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeoHash> {
        self.cells.iter()
    }

    pub fn contains(&self, hash: &GeoHash) -> bool {
        self.cells.contains(hash)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn into_vec(self) -> Vec<GeoHash> {
        self.cells
    }
}

/// Unit direction for walking a ring perimeter counter-clockwise: north
/// along the east edge, west along the north edge, south along the west
/// edge, east along the south edge.
fn ring_direction(offset: CellOffset, ring: i32) -> CellOffset {
    if offset.lon == ring {
        return CellOffset { lat: 1, lon: 0 };
    }
    if offset.lat == ring {
        return CellOffset { lat: 0, lon: -1 };
    }
    if offset.lon == -ring {
        return CellOffset { lat: -1, lon: 0 };
    }
    CellOffset { lat: 0, lon: 1 }
}

/// 90 degree counter-clockwise turn.
fn rotate_direction(direction: CellOffset) -> CellOffset {
    CellOffset {
        lat: direction.lon,
        lon: -direction.lat,
    }
}

/// Advances one step along the ring of Chebyshev radius `ring`, turning at
/// the corners. Returns `None` once the perimeter closes back at the
/// starting offset `(0, ring)`.
pub(crate) fn next_ring_offset(offset: CellOffset, ring: i32) -> Option<CellOffset> {
    let mut direction = ring_direction(offset, ring);

    // The edge rule above still points outward on three of the corners.
    if offset.lat == ring && offset.lon == ring {
        direction = rotate_direction(direction);
    }
    if offset.lat == ring && offset.lon == -ring {
        direction = rotate_direction(direction);
    }
    if offset.lat == -ring && offset.lon == -ring {
        direction = rotate_direction(direction);
    }

    let next = CellOffset {
        lat: offset.lat + direction.lat,
        lon: offset.lon + direction.lon,
    };

    if next.lat == 0 && next.lon == ring {
        return None;
    }
    Some(next)
}

/// Minimum great-circle distance in kilometres from `origin` to the
/// boundary of the cell: the closest of the four rectangle edges.
pub(crate) fn min_distance_to_cell(origin: Position, hash: &GeoHash) -> f64 {
    let rect = hash.rectangle();

    let mut min = distance_km(origin, nearest_on_left_edge(origin, &rect));
    min = min.min(distance_km(origin, nearest_on_right_edge(origin, &rect)));
    min = min.min(distance_km(origin, nearest_on_top_edge(origin, &rect)));
    min.min(distance_km(origin, nearest_on_bottom_edge(origin, &rect)))
}

fn nearest_on_horizontal_edge(origin: Position, lat: f64, rect: &Rectangle) -> Position {
    let mut lon = origin.lon;
    if lon < rect.top_left.lon {
        lon = rect.top_left.lon;
    } else if lon > rect.top_right.lon {
        lon = rect.top_right.lon;
    }
    Position::new(lat, lon)
}

fn nearest_on_top_edge(origin: Position, rect: &Rectangle) -> Position {
    nearest_on_horizontal_edge(origin, rect.top_right.lat, rect)
}

fn nearest_on_bottom_edge(origin: Position, rect: &Rectangle) -> Position {
    nearest_on_horizontal_edge(origin, rect.bottom_right.lat, rect)
}

fn nearest_on_vertical_edge(origin: Position, lon: f64, rect: &Rectangle) -> Position {
    let mut lat = closest_latitude_on_meridian(origin, lon);
    if lat < rect.bottom_left.lat {
        lat = rect.bottom_left.lat;
    } else if lat > rect.top_left.lat {
        lat = rect.top_left.lat;
    }
    Position::new(lat, lon)
}

fn nearest_on_left_edge(origin: Position, rect: &Rectangle) -> Position {
    nearest_on_vertical_edge(origin, rect.top_left.lon, rect)
}

fn nearest_on_right_edge(origin: Position, rect: &Rectangle) -> Position {
    nearest_on_vertical_edge(origin, rect.top_right.lon, rect)
}
