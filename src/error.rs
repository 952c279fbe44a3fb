use thiserror::Error;

/// Errors returned by fallible [`BitVector`](crate::BitVector) operations.
///
/// An operation that returns an error leaves the bit vector unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitVectorError {
    /// The bit index is not in `0..size`.
    #[error("bit index {index} out of range for bit vector of size {size}")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The size of the bit vector at the time of the call.
        size: usize,
    },
    /// Text contained a character other than `'0'` or `'1'`.
    #[error("invalid character {found:?} at position {index}, expected '0' or '1'")]
    InvalidChar {
        /// Character position in the parsed text.
        index: usize,
        /// The offending character.
        found: char,
    },
}
