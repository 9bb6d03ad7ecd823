pub mod codec;
pub mod errors;
pub mod homomorphic;
pub mod identity;
pub mod mailbox;

pub use codec::{RoutingExample, RoutingWeights};
pub use errors::RoutingError;
pub use homomorphic::{HomomorphicBackend, PlainBackend};
pub use identity::Identity;
