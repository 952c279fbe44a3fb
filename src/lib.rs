//! A minimal, fixed-capacity bit vector written in pure Rust.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`BitVector`] is the main struct in this library. The number of bits is
//! chosen at runtime and never changes afterwards. Bits are packed eight to a
//! byte, least significant bit first.
//!
//! # Examples
//! ```
//! use packed_bitvec::BitVector;
//!
//! let mut bits = BitVector::new(10);
//! assert_eq!(bits.count(), 0);
//! bits.set(3)?;
//! bits.set(7)?;
//! assert!(bits.test(3)?);
//! assert!(!bits.test(4)?);
//! assert_eq!(bits.count(), 2);
//! assert_eq!(bits.to_text(), "0001000100");
//! assert!(bits.set(10).is_err());
//! # Ok::<(), packed_bitvec::BitVectorError>(())
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible, needs only `alloc`
//! - Capacity fixed at construction, including zero
//! - Checked bit access: `set`, `clear`, `toggle`, `test` return
//!   [`BitVectorError::OutOfRange`] instead of panicking
//! - Range operations: `set_range`, `clear_range`
//! - Counting and search: `count`, `first_set_bit`
//! - Iteration over all, set or unset bits:
//!   - `iter()` (all bits as bools)
//!   - `iter_ones()` (indices of set bits)
//!   - `iter_zeros()` (indices of unset bits)
//! - Text form: `to_text()`, `Display`, and `FromStr` for `'0'`/`'1'` strings
//!
//! No bitwise operations between vectors and no resizing. If a vector must
//! be shared across threads, wrap it in a lock of your choice.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bit_vector;
mod error;

pub use bit_vector::{BitVector, BitVectorIter, IterOnes, IterZeros, bucket_count};
pub use error::BitVectorError;
