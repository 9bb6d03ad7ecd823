use crate::errors::RingError;

/// Ring configuration: Z_q[x]/(x^n + 1) with a character basis of size k.
///
/// Validated once at construction; every component that produces a
/// [`crate::Polynomial`] receives these through an injected [`crate::Ring`],
/// so multiple ring sizes can coexist side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingParams {
    degree: usize,
    modulus: u64,
    characters: usize,
}

/// Transform multiplication rounds f64 real parts back to integers, so the
/// worst-case convolution coefficient n * (q-1)^2 must stay well inside the
/// exactly-representable range.
const F64_SAFE_BITS: u32 = 52;

impl RingParams {
    pub fn new(degree: usize, modulus: u64, characters: usize) -> Result<Self, RingError> {
        if degree < 2 || !degree.is_power_of_two() {
            return Err(RingError::InvalidDegree { degree });
        }
        if modulus < 3 || modulus & 1 == 0 {
            return Err(RingError::InvalidModulus { modulus });
        }
        if characters == 0 || characters > degree {
            return Err(RingError::InvalidCharacterCount { characters, degree });
        }
        let worst: u128 = degree as u128 * (modulus as u128 - 1) * (modulus as u128 - 1);
        if worst >= 1u128 << F64_SAFE_BITS {
            return Err(RingError::UnsafeProductRange { degree, modulus });
        }
        Ok(Self {
            degree,
            modulus,
            characters,
        })
    }

    /// Small parameters for local runs: degree 64, q = 65537, 8 characters.
    pub fn small() -> Self {
        Self {
            degree: 64,
            modulus: 65537,
            characters: 8,
        }
    }

    /// Mid-size parameters: degree 256, q = 65537, 16 characters.
    pub fn medium() -> Self {
        Self {
            degree: 256,
            modulus: 65537,
            characters: 16,
        }
    }

    #[inline(always)]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline(always)]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline(always)]
    pub fn characters(&self) -> usize {
        self.characters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_presets() {
        assert!(RingParams::new(64, 65537, 8).is_ok());
        assert!(RingParams::new(256, 65537, 16).is_ok());
        assert!(RingParams::new(4096, 65537, 64).is_ok());
    }

    #[test]
    fn rejects_bad_degree() {
        assert_eq!(
            RingParams::new(60, 65537, 8),
            Err(RingError::InvalidDegree { degree: 60 })
        );
        assert!(RingParams::new(0, 65537, 8).is_err());
    }

    #[test]
    fn rejects_bad_modulus() {
        assert!(RingParams::new(64, 65536, 8).is_err());
        assert!(RingParams::new(64, 1, 8).is_err());
    }

    #[test]
    fn rejects_bad_character_count() {
        assert!(RingParams::new(64, 65537, 0).is_err());
        assert!(RingParams::new(64, 65537, 65).is_err());
    }

    #[test]
    fn rejects_unsafe_product_range() {
        // 2^20 * (2^31)^2 is far past the f64 bound.
        assert!(matches!(
            RingParams::new(1 << 20, (1 << 31) + 11, 8),
            Err(RingError::UnsafeProductRange { .. })
        ));
    }
}
