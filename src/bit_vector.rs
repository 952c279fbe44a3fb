use crate::error::BitVectorError;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display, Formatter, Write};
use core::iter::FusedIterator;
use core::ops::Range;
use core::str::FromStr;

/// Computes the number of bytes needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use packed_bitvec::bucket_count;
///
/// assert_eq!(bucket_count(0), 0);
/// assert_eq!(bucket_count(9), 2);
/// assert_eq!(bucket_count(16), 2);
/// assert_eq!(bucket_count(17), 3);
/// ```
pub const fn bucket_count(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

pub(crate) const fn ones_mask(start_bit: usize, width: usize) -> u8 {
    if width >= 8 {
        !0u8
    } else {
        (1u8 << width).wrapping_sub(1) << start_bit
    }
}

/// A fixed-capacity sequence of bits.
///
/// The capacity is chosen once at construction and never changes. Bits are
/// stored in a `Vec<u8>`, eight per byte, with bit `i` at byte `i / 8`,
/// offset `i % 8` (least significant first). Unused bits in the last byte
/// are always zero.
#[derive(PartialEq, Eq, Hash, Clone, Default)]
pub struct BitVector {
    bytes: Vec<u8>,
    len: usize,
}

impl BitVector {
    /// Creates a bit vector holding `len` bits, all unset.
    ///
    /// A length of zero is valid and yields an empty vector.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let bits = BitVector::new(16);
    /// assert_eq!(bits.size(), 16);
    /// assert_eq!(bits.count(), 0);
    /// ```
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0u8; bucket_count(len)],
            len,
        }
    }

    /// Creates a bit vector holding `len` bits, all set.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let bits = BitVector::with_all_set(10);
    /// assert_eq!(bits.count(), 10);
    /// ```
    pub fn with_all_set(len: usize) -> Self {
        let mut bv = Self {
            bytes: vec![!0u8; bucket_count(len)],
            len,
        };
        bv.clean_unused_bits();
        bv
    }

    /// Constructs a bit vector from a boolean slice, where `true` means set.
    ///
    /// The resulting size is the slice length.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_slice(&[true, false, true, false]);
    /// assert_eq!(bits.size(), 4);
    /// assert_eq!(bits.count(), 2);
    /// ```
    pub fn from_slice(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }

    /// Sets the bit at the given index.
    ///
    /// # Errors
    /// Returns [`BitVectorError::OutOfRange`] if `idx >= self.size()`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8);
    /// bits.set(3)?;
    /// assert!(bits.test(3)?);
    /// assert!(bits.set(8).is_err());
    /// # Ok::<(), packed_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize) -> Result<(), BitVectorError> {
        self.check_index(idx, "set")?;
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.bytes[byte_idx] |= 1 << bit_idx;
        Ok(())
    }

    /// Clears (unsets) the bit at the given index.
    ///
    /// # Errors
    /// Returns [`BitVectorError::OutOfRange`] if `idx >= self.size()`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::with_all_set(8);
    /// bits.clear(3)?;
    /// assert!(!bits.test(3)?);
    /// # Ok::<(), packed_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    pub fn clear(&mut self, idx: usize) -> Result<(), BitVectorError> {
        self.check_index(idx, "clear")?;
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.bytes[byte_idx] &= !(1 << bit_idx);
        Ok(())
    }

    /// Toggles the bit at the given index.
    ///
    /// Returns the previous value of the bit (before the toggle).
    ///
    /// # Errors
    /// Returns [`BitVectorError::OutOfRange`] if `idx >= self.size()`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8);
    /// assert_eq!(bits.toggle(4)?, false); // flipped from false to true
    /// assert_eq!(bits.toggle(4)?, true);  // flipped from true to false
    /// # Ok::<(), packed_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    pub fn toggle(&mut self, idx: usize) -> Result<bool, BitVectorError> {
        self.check_index(idx, "toggle")?;
        let (byte_idx, bit_idx) = Self::idxs(idx);
        let bit = self.bytes[byte_idx] & 1 << bit_idx != 0;
        self.bytes[byte_idx] ^= 1 << bit_idx;
        Ok(bit)
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Errors
    /// Returns [`BitVectorError::OutOfRange`] if `idx >= self.size()`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8);
    /// bits.set(1)?;
    /// assert!(bits.test(1)?);
    /// assert!(!bits.test(0)?);
    /// # Ok::<(), packed_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    pub fn test(&self, idx: usize) -> Result<bool, BitVectorError> {
        self.check_index(idx, "test")?;
        let (byte_idx, bit_idx) = Self::idxs(idx);
        Ok(self.bytes[byte_idx] & 1 << bit_idx != 0)
    }

    /// Sets all bits in the given range.
    ///
    /// An empty range is a no-op.
    ///
    /// # Errors
    /// Returns [`BitVectorError::OutOfRange`] if `range.start > self.size()`
    /// or `range.end > self.size()`. Nothing is modified in that case.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8);
    /// bits.set_range(2..6)?;
    /// assert_eq!(bits.to_text(), "00111100");
    /// # Ok::<(), packed_bitvec::BitVectorError>(())
    /// ```
    pub fn set_range(&mut self, range: Range<usize>) -> Result<(), BitVectorError> {
        self.check_range(&range, "set_range")?;
        if range.start >= range.end {
            return Ok(());
        }

        let (start_byte, start_bit) = Self::idxs(range.start);
        let (end_byte, end_bit) = Self::idxs(range.end - 1);

        // all within one byte
        if start_byte == end_byte {
            self.bytes[start_byte] |= ones_mask(start_bit, end_bit - start_bit + 1);
            return Ok(());
        }

        self.bytes[start_byte] |= !0u8 << start_bit;
        for byte in &mut self.bytes[start_byte + 1..end_byte] {
            *byte = !0;
        }
        self.bytes[end_byte] |= ones_mask(0, end_bit + 1);
        Ok(())
    }

    /// Clears all bits in the given range.
    ///
    /// An empty range is a no-op.
    ///
    /// # Errors
    /// Returns [`BitVectorError::OutOfRange`] if `range.start > self.size()`
    /// or `range.end > self.size()`. Nothing is modified in that case.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::with_all_set(8);
    /// bits.clear_range(2..6)?;
    /// assert_eq!(bits.to_text(), "11000011");
    /// # Ok::<(), packed_bitvec::BitVectorError>(())
    /// ```
    pub fn clear_range(&mut self, range: Range<usize>) -> Result<(), BitVectorError> {
        self.check_range(&range, "clear_range")?;
        if range.start >= range.end {
            return Ok(());
        }

        let (start_byte, start_bit) = Self::idxs(range.start);
        let (end_byte, end_bit) = Self::idxs(range.end - 1);

        if start_byte == end_byte {
            self.bytes[start_byte] &= !ones_mask(start_bit, end_bit - start_bit + 1);
            return Ok(());
        }

        self.bytes[start_byte] &= (1u8 << start_bit) - 1;
        for byte in &mut self.bytes[start_byte + 1..end_byte] {
            *byte = 0;
        }
        self.bytes[end_byte] &= !ones_mask(0, end_bit + 1);
        Ok(())
    }

    /// Returns the number of bits, as fixed at construction.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Same as [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no bits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of set bits.
    ///
    /// Walks every position in order, so this runs in O(size).
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_slice(&[true, false, true, false]);
    /// assert_eq!(bits.count(), 2);
    /// ```
    pub fn count(&self) -> usize {
        self.iter().filter(|&bit| bit).count()
    }

    /// Renders the bits as a string of `'0'` and `'1'`, position 0 first.
    ///
    /// The result always has exactly [`size`](Self::size) characters.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8);
    /// bits.set(0)?;
    /// bits.set(7)?;
    /// bits.toggle(7)?;
    /// assert_eq!(bits.to_text(), "10000000");
    /// # Ok::<(), packed_bitvec::BitVectorError>(())
    /// ```
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.len);
        out.extend(self.iter().map(bit_char));
        out
    }

    /// Returns the index of the first set bit or `None` if all bits are unset.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(12);
    /// assert_eq!(bits.first_set_bit(), None);
    /// bits.set(9)?;
    /// assert_eq!(bits.first_set_bit(), Some(9));
    /// # Ok::<(), packed_bitvec::BitVectorError>(())
    /// ```
    pub fn first_set_bit(&self) -> Option<usize> {
        self.bytes
            .iter()
            .enumerate()
            .find(|(_, byte)| **byte != 0)
            .map(|(i, byte)| i * 8 + byte.trailing_zeros() as usize)
    }

    /// Returns an iterator over all bits as `bool`, from position 0 upwards.
    ///
    /// The iterator yields exactly [`size`](Self::size) items.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_slice(&[true, false, true]);
    /// assert!(bits.iter().eq([true, false, true]));
    /// ```
    #[inline]
    pub fn iter(&self) -> BitVectorIter<'_> {
        BitVectorIter {
            bytes: &self.bytes,
            len: self.len,
            idx: 0,
        }
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_slice(&[true, false, true, false, true]);
    /// assert!(bits.iter_ones().eq([0, 2, 4]));
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes {
            bytes: &self.bytes,
            len: self.len,
            byte_idx: 0,
            current: self.bytes.first().copied().unwrap_or(0),
            base_bit_idx: 0,
        }
    }

    /// Returns an iterator over the indices of all unset bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use packed_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_slice(&[true, false, true, false, true]);
    /// assert!(bits.iter_zeros().eq([1, 3]));
    /// ```
    #[inline]
    pub fn iter_zeros(&self) -> IterZeros<'_> {
        IterZeros {
            bytes: &self.bytes,
            len: self.len,
            byte_idx: 0,
            current: !self.bytes.first().copied().unwrap_or(!0),
            base_bit_idx: 0,
        }
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / 8, idx % 8)
    }

    fn check_index(&self, idx: usize, op: &str) -> Result<(), BitVectorError> {
        if idx < self.len {
            return Ok(());
        }
        log::trace!("{op}: bit index {idx} rejected, size is {}", self.len);
        Err(BitVectorError::OutOfRange {
            index: idx,
            size: self.len,
        })
    }

    fn check_range(&self, range: &Range<usize>, op: &str) -> Result<(), BitVectorError> {
        for bound in [range.start, range.end] {
            if bound > self.len {
                log::trace!(
                    "{op}: range {}..{} rejected, size is {}",
                    range.start,
                    range.end,
                    self.len
                );
                return Err(BitVectorError::OutOfRange {
                    index: bound,
                    size: self.len,
                });
            }
        }
        Ok(())
    }

    fn clean_unused_bits(&mut self) {
        let bits_in_last = self.len % 8;
        if bits_in_last != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= (1 << bits_in_last) - 1;
            }
        }
    }
}

#[inline]
fn bit_char(bit: bool) -> char {
    if bit { '1' } else { '0' }
}

impl<'bv> IntoIterator for &'bv BitVector {
    type Item = bool;
    type IntoIter = BitVectorIter<'bv>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LSB ->")?;
        for (i, bit) in self.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, " {i}: ")?;
            }
            f.write_char(bit_char(bit))?;
        }
        write!(f, " <- MSB")
    }
}

impl Display for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(bit_char(bit))?;
        }
        Ok(())
    }
}

/// Parses the text form produced by [`BitVector::to_text`].
///
/// Each character becomes one bit, so the size equals the number of
/// characters. An empty string parses to an empty vector.
impl FromStr for BitVector {
    type Err = BitVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bv = Self::new(s.chars().count());
        for (idx, ch) in s.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => bv.set(idx)?,
                found => return Err(BitVectorError::InvalidChar { index: idx, found }),
            }
        }
        Ok(bv)
    }
}

/// Constructs a bit vector from an iterator over `bool`s.
///
/// The size equals the number of items yielded.
impl FromIterator<bool> for BitVector {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut bytes = Vec::new();
        let mut len = 0;
        for bit in iter {
            let (byte_idx, bit_idx) = Self::idxs(len);
            if bit_idx == 0 {
                bytes.push(0u8);
            }
            if bit {
                bytes[byte_idx] |= 1 << bit_idx;
            }
            len += 1;
        }
        Self { bytes, len }
    }
}

/// Iterator over all bits in the bit vector as `bool` values.
///
/// Yields `true` for set bits and `false` for unset bits, starting from index 0.
///
/// Returned by [`BitVector::iter()`].
#[derive(Clone)]
pub struct BitVectorIter<'bv> {
    bytes: &'bv [u8],
    len: usize,
    idx: usize,
}

impl Iterator for BitVectorIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.len {
            return None;
        }
        let (byte_idx, bit_idx) = BitVector::idxs(self.idx);
        self.idx += 1;
        Some(self.bytes[byte_idx] & 1 << bit_idx != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitVectorIter<'_> {}

impl FusedIterator for BitVectorIter<'_> {}

/// Iterator over the indices of set bits in the bit vector.
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`BitVector::iter_ones()`].
#[derive(Clone)]
pub struct IterOnes<'bv> {
    bytes: &'bv [u8],
    len: usize,
    byte_idx: usize,
    current: u8,
    base_bit_idx: usize,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.byte_idx < self.bytes.len() {
            if self.current != 0 {
                let idx = self.base_bit_idx + self.current.trailing_zeros() as usize;
                if idx >= self.len {
                    self.current = 0;
                    return None;
                }
                self.current &= self.current - 1; // unset LSB
                return Some(idx);
            }

            self.byte_idx += 1;
            self.base_bit_idx += 8;
            self.current = self.bytes.get(self.byte_idx).copied().unwrap_or(0);
        }
        None
    }
}

impl FusedIterator for IterOnes<'_> {}

/// Iterator over the indices of unset bits in the bit vector.
///
/// Yields the positions of all bits that are unset, in ascending order.
///
/// Returned by [`BitVector::iter_zeros()`].
#[derive(Clone)]
pub struct IterZeros<'bv> {
    bytes: &'bv [u8],
    len: usize,
    byte_idx: usize,
    current: u8,
    base_bit_idx: usize,
}

impl Iterator for IterZeros<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.byte_idx < self.bytes.len() {
            if self.current != 0 {
                let idx = self.base_bit_idx + self.current.trailing_zeros() as usize;
                // padding bits read as zeros here
                if idx >= self.len {
                    self.current = 0;
                    return None;
                }
                self.current &= self.current - 1;
                return Some(idx);
            }

            self.byte_idx += 1;
            self.base_bit_idx += 8;
            self.current = !self.bytes.get(self.byte_idx).copied().unwrap_or(!0);
        }
        None
    }
}

impl FusedIterator for IterZeros<'_> {}
