//! Small shared utilities.

/// Deterministic xorshift64 generator.
///
/// The demos want reproducible scatter (random outline endpoints, color
/// values) without pulling in an RNG crate; xorshift is plenty for that.
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Creates a generator from a seed. A zero seed is bumped to one,
    /// since xorshift has a fixed point at zero.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// A random u8 from the high bits.
    #[inline]
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    /// A random f32 in `[0, 1)`.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() & 0xFFFFFF) as f32 / 0x1000000 as f32
    }

    /// A random f32 in `[min, max)`.
    #[inline]
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}
