use crate::core::bits::{axis_bit_widths, bits_to_coordinate, coordinate_to_bits, spread_bits};
use crate::core::constants::{BASE32_ALPHABET, LAT_RANGE, LON_RANGE, MAX_PRECISION};
use crate::util::coord::{Coordinate, Position};
use crate::util::error::GeoHashError;
use geo_types::{Coord, LineString, Polygon, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single geohash cell.
///
/// Holds the precision (output character count, 1-12) together with the
/// quantized latitude and longitude bit patterns. Two hashes are equal iff
/// precision and both bit patterns match. A `GeoHash` is a plain value:
/// navigation returns new hashes and never mutates in place.
///
/// # Example
///
/// ```
/// use nearhash::GeoHash;
///
/// # fn main() -> Result<(), nearhash::GeoHashError> {
/// let hash = GeoHash::encode(&(48.669, 22.445), 5)?;
/// assert_eq!(hash.to_string(), "u2xuy");
///
/// let corners = hash.rectangle();
/// assert!(corners.bottom_left.lat <= 48.669);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoHash {
    precision: u32,
    lat: u32,
    lon: u32,
}

/// Grid offset relative to another cell, in whole cells per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct CellOffset {
    pub lat: i32,
    pub lon: i32,
}

impl GeoHash {
    /// Encodes a coordinate at the given precision (1-12 characters).
    ///
    /// Coordinates outside the valid WGS84 ranges are not checked and encode
    /// to an undefined cell, matching the truncation formulas in
    /// [`core::bits`](crate::core::bits).
    pub fn encode(coord: &impl Coordinate, precision: u32) -> Result<Self, GeoHashError> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(GeoHashError::InvalidPrecision(precision));
        }

        let (lat_width, lon_width) = axis_bit_widths(precision);
        Ok(Self {
            precision,
            lat: coordinate_to_bits(coord.lat(), LAT_RANGE, lat_width),
            lon: coordinate_to_bits(coord.lon(), LON_RANGE, lon_width),
        })
    }

    /// Output character count of this hash.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Bottom-left corner of the cell.
    pub fn position(&self) -> Position {
        let (lat_width, lon_width) = axis_bit_widths(self.precision);
        Position::new(
            bits_to_coordinate(self.lat, LAT_RANGE, lat_width),
            bits_to_coordinate(self.lon, LON_RANGE, lon_width),
        )
    }

    /// The four corners of the cell.
    ///
    /// Corners are composed from navigation (`right`/`top`) rather than
    /// independent arithmetic, so adjacent cells share exact corner values.
    pub fn rectangle(&self) -> Rectangle {
        let top = self.top();
        Rectangle {
            bottom_left: self.position(),
            bottom_right: self.right().position(),
            top_left: top.position(),
            top_right: top.right().position(),
        }
    }

    /// The cell one step west.
    pub fn left(&self) -> Self {
        self.add_offset(CellOffset { lat: 0, lon: -1 })
    }

    /// The cell one step east.
    pub fn right(&self) -> Self {
        self.add_offset(CellOffset { lat: 0, lon: 1 })
    }

    /// The cell one step north.
    pub fn top(&self) -> Self {
        self.add_offset(CellOffset { lat: 1, lon: 0 })
    }

    /// The cell one step south.
    pub fn bottom(&self) -> Self {
        self.add_offset(CellOffset { lat: -1, lon: 0 })
    }

    /// Moves by whole cells on each axis, wrapping modularly at the grid
    /// edges.
    ///
    /// Both axes wrap as on a flat torus: crossing the antimeridian lands on
    /// the opposite edge, and the top latitude row wraps to the bottom row
    /// the same way. True latitude wraparound is not geographically
    /// meaningful (a pole is a point, not an edge); the uniform treatment is
    /// a deliberate simplification of this grid.
    pub(crate) fn add_offset(&self, offset: CellOffset) -> Self {
        let (lat_width, lon_width) = axis_bit_widths(self.precision);
        Self {
            precision: self.precision,
            lat: wrap_axis(self.lat, offset.lat, lat_width),
            lon: wrap_axis(self.lon, offset.lon, lon_width),
        }
    }

    /// Cell boundary as a closed `geo_types` polygon, for GIS interop.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.rectangle().to_polygon()
    }

    /// Cell boundary rendered as WKT.
    pub fn to_wkt(&self) -> String {
        use wkt::ToWkt;
        self.to_polygon().wkt_string()
    }

    /// Cell boundary rendered as a GeoJSON geometry string.
    pub fn to_geojson(&self) -> String {
        geojson::Geometry::from(&self.to_polygon()).to_string()
    }
}

fn wrap_axis(bits: u32, steps: i32, width: u32) -> u32 {
    let cells = 1i64 << width;
    (bits as i64 + steps as i64).rem_euclid(cells) as u32
}

impl fmt::Display for GeoHash {
    /// Renders the base-32 string: both bit streams are spread to every
    /// other position, merged with the longitude stream supplying the most
    /// significant bit (longitude leads whenever it carries the extra bit),
    /// then sliced into 5-bit groups emitted most significant first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat_width, lon_width) = axis_bit_widths(self.precision);
        let lat_spread = spread_bits(self.lat as u64, lat_width);
        let lon_spread = spread_bits(self.lon as u64, lon_width);

        let mut merged = if lat_width == lon_width {
            lat_spread | (lon_spread << 1)
        } else {
            (lat_spread << 1) | lon_spread
        };

        let mut groups = [0u8; MAX_PRECISION as usize];
        for group in groups.iter_mut().take(self.precision as usize) {
            *group = (merged & 0b11111) as u8;
            merged >>= 5;
        }

        for index in (0..self.precision as usize).rev() {
            write!(f, "{}", BASE32_ALPHABET[groups[index] as usize] as char)?;
        }
        Ok(())
    }
}

/// The four corners of a geohash cell.
///
/// Corners of cells that wrap across the antimeridian (or a pole row) carry
/// the wrapped coordinates; the rectangle is then not a plain bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub bottom_left: Position,
    pub bottom_right: Position,
    pub top_left: Position,
    pub top_right: Position,
}

impl Rectangle {
    /// Closed exterior ring, counter-clockwise from the bottom-left corner.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let coords = vec![
            Coord { x: self.bottom_left.lon, y: self.bottom_left.lat },
            Coord { x: self.bottom_right.lon, y: self.bottom_right.lat },
            Coord { x: self.top_right.lon, y: self.top_right.lat },
            Coord { x: self.top_left.lon, y: self.top_left.lat },
            Coord { x: self.bottom_left.lon, y: self.bottom_left.lat },
        ];
        Polygon::new(LineString::from(coords), vec![])
    }

    /// Axis-aligned `geo_types::Rect` spanning bottom-left to top-right.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord { x: self.bottom_left.lon, y: self.bottom_left.lat },
            Coord { x: self.top_right.lon, y: self.top_right.lat },
        )
    }
}
