use packed_bitvec::{BitVector, BitVectorError};

fn main() -> Result<(), BitVectorError> {
    let mut bits = BitVector::new(10);
    bits.set(3)?;
    bits.set(7)?;
    assert_eq!(bits.count(), 2);
    assert_eq!(bits.to_text(), "0001000100");
    assert!(bits.test(3)?);
    assert!(!bits.test(4)?);

    let mut empty = BitVector::default();
    assert_eq!(empty.size(), 0);
    assert_eq!(empty.to_text(), "");
    assert!(matches!(
        empty.set(0),
        Err(BitVectorError::OutOfRange { index: 0, size: 0 })
    ));

    let mut byte = BitVector::new(8);
    byte.set(0)?;
    byte.set(7)?;
    byte.toggle(7)?;
    assert_eq!(byte.to_text(), "10000000");
    Ok(())
}
