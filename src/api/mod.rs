pub mod cell;
pub mod nearby;

pub use cell::{GeoHash, Rectangle};
pub use nearby::{NearbyCells, nearby_geohashes};
