use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheafError {
    #[error("no patches provided")]
    NoPatches,

    #[error("degenerate linear system: {rows} rows x {cols} columns")]
    DegenerateSystem { rows: usize, cols: usize },

    #[error("least-squares solve failed: {0}")]
    Solver(String),

    #[error("no routing weights learned; call learn_routing first")]
    NotLearned,

    #[error("gluing constraint violated: {patch_a} -> {patch_b}")]
    GluingViolated { patch_a: String, patch_b: String },
}
