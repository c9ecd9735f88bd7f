pub mod coord;
pub mod error;

pub use coord::{Coordinate, Position};
pub use error::GeoHashError;
