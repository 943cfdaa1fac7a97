pub mod frequency;
pub mod trace;

use crate::util::hash::Djb2Hasher;

use self::frequency::FrequencyTable;

/// Fingerprint of one name: byte length, raw DJB2 hash, and the frequency-mixed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    pub length: usize,
    pub hash: u32,
    pub result: u32,
}

/// Compute the fingerprint of `name`.
///
/// The hash pass runs `h = h * 33 + c` from 5381, then every distinct byte value `v`
/// XORs `count(v) * v` into the result. All arithmetic wraps modulo 2^32.
pub fn compute_fingerprint(name: &[u8]) -> Fingerprint {
    let mut hasher = Djb2Hasher::new();
    hasher.update(name);
    let hash = hasher.finish();

    let result = FrequencyTable::from_bytes(name).mix(hash);

    Fingerprint {
        length: name.len(),
        hash,
        result,
    }
}
