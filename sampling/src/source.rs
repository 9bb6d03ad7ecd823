use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;

/// Deterministic CSPRNG used for identity generation.
///
/// Wraps ChaCha8 so that a [`Source`] can be either seeded explicitly
/// (reproducible tests) or drawn from OS entropy, and branched into
/// independent child sources.
pub struct Source {
    source: ChaCha8Rng,
}

pub fn new_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Creates a source seeded from the operating system.
    pub fn from_entropy() -> Source {
        Source::new(new_seed())
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Uniform value in [0, max) by masked rejection.
    #[inline(always)]
    pub fn uniform_mod(&mut self, max: u64) -> u64 {
        debug_assert!(max > 0, "invalid argument max: max = 0");
        let mask: u64 = mask_for(max);
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Fills `coeffs` with independent uniform values in [0, max).
    pub fn fill_uniform_mod(&mut self, max: u64, coeffs: &mut [u64]) {
        coeffs.iter_mut().for_each(|c| *c = self.uniform_mod(max));
    }
}

/// Smallest all-ones mask covering values below `max`.
#[inline(always)]
fn mask_for(max: u64) -> u64 {
    if max <= 1 {
        return 0;
    }
    u64::MAX >> (max - 1).leading_zeros()
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
