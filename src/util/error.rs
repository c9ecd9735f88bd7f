/// Error type for nearhash operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GeoHashError {
    /// The precision is outside the valid range (1-12).
    InvalidPrecision(u32),
}

impl std::fmt::Display for GeoHashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoHashError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
        }
    }
}

impl std::error::Error for GeoHashError {}
