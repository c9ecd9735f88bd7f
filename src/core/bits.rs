use crate::core::constants::BITS_PER_CHAR;

/// Splits the bit budget for a precision into (latitude, longitude) bit
/// widths. Longitude gets the extra bit when the budget is odd.
pub fn axis_bit_widths(precision: u32) -> (u32, u32) {
    let total = precision * BITS_PER_CHAR;
    let lat = total >> 1;
    (lat, total - lat)
}

/// Quantizes a coordinate into a fixed-width bit pattern.
///
/// Computes `floor((value - low) * 2^width / (high - low))`. Truncation is
/// the defined semantics: a cell is identified by its lower-left corner.
/// Values outside `range` are a caller contract violation and produce an
/// undefined (non-crashing) result.
pub(crate) fn coordinate_to_bits(value: f64, range: (f64, f64), width: u32) -> u32 {
    let cells = (1u64 << width) as f64;
    ((value - range.0) * cells / (range.1 - range.0)) as u32
}

/// Inverse of [`coordinate_to_bits`]: the bottom/left edge of the cell, not
/// its center.
pub(crate) fn bits_to_coordinate(bits: u32, range: (f64, f64), width: u32) -> f64 {
    let cells = (1u64 << width) as f64;
    bits as f64 * (range.1 - range.0) / cells + range.0
}

/// Spreads the low nibble of `a` so each bit lands on an even position.
fn spread_nibble(a: u8) -> u8 {
    let mut out = a & 0b1;
    out |= (a & 0b10) << 1;
    out |= (a & 0b100) << 2;
    out |= (a & 0b1000) << 3;
    out
}

/// Moves each of the low `count` bits of `bits` to every other position of
/// the result, leaving a gap between consecutive source bits. Two streams
/// spread this way interleave with a single shift-and-or.
pub(crate) fn spread_bits(bits: u64, count: u32) -> u64 {
    let nibbles = count.div_ceil(4);

    let mut out = 0u64;
    for index in 0..nibbles {
        let nibble = ((bits >> (4 * index)) & 0xf) as u8;
        out |= (spread_nibble(nibble) as u64) << (8 * index);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{LAT_RANGE, LON_RANGE};

    #[test]
    fn test_axis_bit_widths() {
        assert_eq!(axis_bit_widths(1), (2, 3));
        assert_eq!(axis_bit_widths(2), (5, 5));
        assert_eq!(axis_bit_widths(5), (12, 13));
        assert_eq!(axis_bit_widths(12), (30, 30));
    }

    #[test]
    fn test_spread_bits() {
        assert_eq!(spread_bits(0b11, 2), 0b101);
        assert_eq!(spread_bits(0b101, 3), 0b10001);
        assert_eq!(spread_bits(0b1111111, 7), 0b1010101010101);
        assert_eq!(spread_bits(0b1111001, 7), 0b1010101000001);
        assert_eq!(spread_bits(0b11111001, 8), 0b101010101000001);
    }

    #[test]
    fn test_coordinate_to_bits_truncates() {
        // 0.0439453125 degrees per cell at 13 longitude bits; anything inside
        // the first cell maps to pattern 4096 (the cell spanning [0, 0.0439)).
        assert_eq!(coordinate_to_bits(0.0, LON_RANGE, 13), 4096);
        assert_eq!(coordinate_to_bits(0.04, LON_RANGE, 13), 4096);
        assert_eq!(coordinate_to_bits(0.0439453125, LON_RANGE, 13), 4097);
    }

    #[test]
    fn test_bits_to_coordinate_is_cell_bottom_edge() {
        assert_eq!(bits_to_coordinate(4096, LON_RANGE, 13), 0.0);
        assert_eq!(bits_to_coordinate(4097, LON_RANGE, 13), 0.0439453125);
        assert_eq!(bits_to_coordinate(2048, LAT_RANGE, 12), 0.0);
        assert_eq!(bits_to_coordinate(0, LAT_RANGE, 12), -90.0);
    }

    #[test]
    fn test_roundtrip_within_one_cell() {
        let width = 12;
        let cell = 180.0 / (1u64 << width) as f64;
        for &lat in &[-89.9, -45.3, 0.0, 17.25, 89.9] {
            let bits = coordinate_to_bits(lat, LAT_RANGE, width);
            let edge = bits_to_coordinate(bits, LAT_RANGE, width);
            assert!(edge <= lat && lat < edge + cell, "lat {} edge {}", lat, edge);
        }
    }
}
