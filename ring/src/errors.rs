use thiserror::Error;

/// Errors surfaced by ring construction and the fallible ring operations.
///
/// Pure arithmetic on well-formed polynomials never fails and returns
/// values directly; only explicit preconditions produce these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("invalid degree {degree}: must be a power of two")]
    InvalidDegree { degree: usize },

    #[error("invalid modulus {modulus}: must be an odd prime >= 3")]
    InvalidModulus { modulus: u64 },

    #[error("invalid character count {characters}: must be in [1, {degree}]")]
    InvalidCharacterCount { characters: usize, degree: usize },

    #[error(
        "unsafe ring parameters: degree {degree} * modulus {modulus}^2 exceeds \
         the f64 rounding bound 2^52 for transform multiplication"
    )]
    UnsafeProductRange { degree: usize, modulus: u64 },

    #[error("too many values to encode: {len} > {degree}")]
    EncodeTooLong { len: usize, degree: usize },

    #[error("character index {index} out of range: must be < {characters}")]
    CharacterOutOfRange { index: usize, characters: usize },
}
