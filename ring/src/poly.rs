/// Element of Z_q[x]/(x^n + 1), stored as its length-n coefficient vector
/// with every residue in [0, q).
///
/// Immutable value type: every ring operation returns a new instance.
/// Equality is exact coefficient-vector equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial(pub(crate) Vec<u64>);

impl Polynomial {
    pub fn coefficients(&self) -> &[u64] {
        &self.0
    }

    /// Returns the coefficient vector (c_0, ..., c_{n-1}).
    pub fn decode(&self) -> Vec<u64> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}
