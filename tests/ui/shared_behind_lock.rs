use packed_bitvec::BitVector;
use std::sync::{Arc, Mutex};
use std::thread;

fn main() {
    let bits = Arc::new(Mutex::new(BitVector::new(64)));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let bits = Arc::clone(&bits);
            thread::spawn(move || {
                for idx in (t..64).step_by(4) {
                    bits.lock().unwrap().set(idx).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let bits = bits.lock().unwrap();
    assert_eq!(bits.count(), 64);
    assert_eq!(bits.iter_zeros().next(), None);
}
