pub mod bits;
pub mod constants;
pub mod sphere;

pub use bits::axis_bit_widths;
pub use constants::{BASE32_ALPHABET, EARTH_RADIUS_KM, MAX_PRECISION};
pub use sphere::{closest_latitude_on_meridian, distance_km};
