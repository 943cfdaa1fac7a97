//! Step-by-step record of a fingerprint computation.
//!
//! Library-level audit aid: the CLI prints only the final values.

use crate::util::hash::Djb2Hasher;

use super::Fingerprint;
use super::frequency::{FrequencyTable, contribution};

/// One byte of the hash pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashStep {
    pub index: usize,
    pub byte: u8,
    pub before: u32,
    pub after: u32,
}

/// One distinct byte value of the mixing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixStep {
    pub value: u8,
    pub count: u32,
    pub contribution: u32,
    pub before: u32,
    pub after: u32,
}

/// Every intermediate state of a fingerprint computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintTrace {
    pub hash_steps: Vec<HashStep>,
    pub mix_steps: Vec<MixStep>,
    pub fingerprint: Fingerprint,
}

/// Compute the fingerprint of `name`, recording each hash step in input order and
/// each mixing step in ascending byte-value order.
pub fn trace_fingerprint(name: &[u8]) -> FingerprintTrace {
    let mut hasher = Djb2Hasher::new();
    let hash_steps: Vec<HashStep> = name
        .iter()
        .enumerate()
        .map(|(index, byte)| {
            let before = hasher.finish();
            let after = hasher.push(*byte);
            HashStep {
                index,
                byte: *byte,
                before,
                after,
            }
        })
        .collect();
    let hash = hasher.finish();

    let table = FrequencyTable::from_bytes(name);
    let mut result = hash;
    let mut mix_steps = Vec::new();
    for (value, count) in table.iter_nonzero() {
        let contribution = contribution(value, count);
        let before = result;
        result ^= contribution;
        mix_steps.push(MixStep {
            value,
            count,
            contribution,
            before,
            after: result,
        });
    }

    FingerprintTrace {
        hash_steps,
        mix_steps,
        fingerprint: Fingerprint {
            length: name.len(),
            hash,
            result,
        },
    }
}
