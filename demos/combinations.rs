use packed_bitvec::{BitVector, BitVectorError};

/// Prints every subset of `0..picks.size()` as a '0'/'1' mask.
fn combinations(idx: usize, picks: &mut BitVector) -> Result<(), BitVectorError> {
    if idx == picks.size() {
        println!("{picks}  ({} picked)", picks.count());
        return Ok(());
    }
    picks.set(idx)?;
    combinations(idx + 1, picks)?;
    picks.clear(idx)?;
    combinations(idx + 1, picks)
}

fn main() -> Result<(), BitVectorError> {
    let size = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4);
    let mut picks = BitVector::new(size);
    combinations(0, &mut picks)
}
