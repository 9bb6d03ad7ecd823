/// Prime-modulus scalar arithmetic.
///
/// All residues are kept in [0, q). Products go through u128 widening;
/// q is small enough here that lazy-reduction tricks buy nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    q: u64,
}

impl Modulus {
    pub fn new(q: u64) -> Self {
        debug_assert!(q >= 3, "invalid modulus q: q = {} < 3", q);
        Self { q }
    }

    #[inline(always)]
    pub fn q(&self) -> u64 {
        self.q
    }

    #[inline(always)]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.q && b < self.q);
        let s: u64 = a + b;
        if s >= self.q { s - self.q } else { s }
    }

    #[inline(always)]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.q && b < self.q);
        if a >= b { a - b } else { a + self.q - b }
    }

    #[inline(always)]
    pub fn neg(&self, a: u64) -> u64 {
        debug_assert!(a < self.q);
        if a == 0 { 0 } else { self.q - a }
    }

    #[inline(always)]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.q && b < self.q);
        ((a as u128 * b as u128) % self.q as u128) as u64
    }

    /// Reduces a signed value into [0, q).
    #[inline(always)]
    pub fn reduce_i64(&self, v: i64) -> u64 {
        let q: i64 = self.q as i64;
        let r: i64 = v % q;
        if r < 0 { (r + q) as u64 } else { r as u64 }
    }
}
