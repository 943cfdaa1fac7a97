/// Occurrence counts for every byte value in one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; 256],
}

impl FrequencyTable {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0u32; 256];
        for byte in bytes {
            let slot = &mut counts[usize::from(*byte)];
            *slot = slot.wrapping_add(1);
        }
        Self { counts }
    }

    pub fn count(&self, value: u8) -> u32 {
        self.counts[usize::from(value)]
    }

    /// Nonzero `(value, count)` pairs in ascending byte-value order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (0..=u8::MAX)
            .zip(self.counts.iter().copied())
            .filter(|(_, count)| *count != 0)
    }

    /// XOR each `count * value` term into `seed`.
    pub fn mix(&self, seed: u32) -> u32 {
        self.iter_nonzero()
            .fold(seed, |acc, (value, count)| acc ^ contribution(value, count))
    }
}

pub(crate) fn contribution(value: u8, count: u32) -> u32 {
    count.wrapping_mul(u32::from(value))
}
