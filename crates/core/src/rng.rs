//! RNG module - injectable uniform random source for piece selection
//!
//! Every field owns its own generator, so two fields never share random state and a
//! seeded field replays the same piece sequence.

/// Source of uniformly distributed integers
pub trait Randomizer {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, bound)`, without modulo bias
    ///
    /// Uses the high bits of a 32x32 multiply and rejects the short tail, so it stays
    /// unbiased even for generators whose low bits are weak. `bound == 0` yields 0.
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let product = u64::from(self.next_u32()) * u64::from(bound);
            if (product as u32) >= threshold {
                return (product >> 32) as u32;
            }
        }
    }
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed for sub-stream `stream` of a session seeded with `seed`
    ///
    /// Mixes both inputs (splitmix32 finalizer) so neighbouring streams start far apart.
    pub fn derive(seed: u32, stream: u32) -> u32 {
        let mut z = seed
            .wrapping_add(stream.wrapping_mul(0x9E37_79B9))
            .wrapping_add(0x9E37_79B9);
        z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
        z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
        z ^ (z >> 16)
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Randomizer for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
