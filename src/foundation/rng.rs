/// Upper bound (exclusive) for string-derived seeds.
pub const STRING_SEED_MODULUS: u32 = 2_147_483_647;

/// Deterministic pseudo-random source (mulberry32).
///
/// Two instances built from the same seed and advanced the same number of times produce
/// identical sequences. The whole generation pipeline threads one instance explicitly; nothing
/// in the crate reads a global random source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a source from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a source from a string seed (see [`seed_from_str`]).
    pub fn from_str_seed(seed: &str) -> Self {
        Self::new(seed_from_str(seed))
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next float in `[0, 1)`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform float in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// Uniform integer in `[min, max]` (inclusive). Returns `min` when `max < min`.
    pub fn int_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = f64::from(max - min) + 1.0;
        // next() < 1 so the floor never reaches span.
        min + (self.next() * span).floor() as u32
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next() < p
    }

    /// Pick one element uniformly. Returns `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.int_range(0, (items.len() - 1) as u32) as usize;
        items.get(idx)
    }
}

/// Reduce a string to a seed by summing its UTF-16 code units modulo
/// [`STRING_SEED_MODULUS`].
///
/// The reduction is lossy: anagrams and other strings with equal code-unit sums collide.
pub fn seed_from_str(s: &str) -> u32 {
    s.encode_utf16()
        .fold(0u32, |acc, unit| (acc + u32::from(unit)) % STRING_SEED_MODULUS)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
