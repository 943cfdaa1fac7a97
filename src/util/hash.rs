/// Rolling DJB2 hasher (`h = h * 33 + c`) over raw bytes with `u32` wraparound.
#[derive(Debug, Clone)]
pub struct Djb2Hasher {
    state: u32,
}

impl Djb2Hasher {
    pub const SEED: u32 = 5381;
    const MULTIPLIER: u32 = 33;

    pub fn new() -> Self {
        Self { state: Self::SEED }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.push(*byte);
        }
    }

    /// Feed one byte and return the accumulator after it.
    pub fn push(&mut self, byte: u8) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(u32::from(byte));
        self.state
    }

    pub fn finish(&self) -> u32 {
        self.state
    }
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self::new()
    }
}
