/// Maximum supported precision in output characters.
///
/// Twelve characters is 60 interleaved bits, the most that fits the 64-bit
/// accumulator used when rendering a hash string.
pub const MAX_PRECISION: u32 = 12;

/// Bits of output per geohash character.
pub(crate) const BITS_PER_CHAR: u32 = 5;

/// Standard geohash base-32 alphabet (omits a, i, l and o).
pub const BASE32_ALPHABET: [u8; 32] = *b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Mean Earth radius in kilometres; all distances and radii are in km.
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// Latitude axis range in degrees (low, high).
pub(crate) const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Longitude axis range in degrees (low, high).
pub(crate) const LON_RANGE: (f64, f64) = (-180.0, 180.0);
