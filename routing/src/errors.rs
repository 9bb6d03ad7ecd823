use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("real identity cannot be empty")]
    EmptyIdentity,

    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("contact name cannot be empty")]
    EmptyContactName,

    #[error("contact not found: {0}")]
    ContactNotFound(String),

    #[error("no training examples provided")]
    NoExamples,

    #[error(
        "invalid dimensions: {positions} positions x {characters} characters \
         for ring with degree {degree} and {ring_characters} characters"
    )]
    InvalidDimensions {
        positions: usize,
        characters: usize,
        degree: usize,
        ring_characters: usize,
    },

    #[error("weight solve failed: {0}")]
    Solver(String),
}
