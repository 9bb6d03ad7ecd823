pub mod errors;
pub mod gluing;
pub mod patch;
pub mod router;
pub mod solver;

pub use errors::SheafError;
pub use gluing::{GluingConstraint, GluingKind};
pub use patch::Patch;
pub use router::{RoutingProblem, RoutingResult, SheafRouter};
