use ring::{Polynomial, Ring};
use routing::RoutingWeights;
use routing::codec::apply_routing_weights;

/// A named network region with its own local routing function phi_patch.
///
/// Immutable: id and weights are fixed at creation. The local routing is
/// the position-weighted character recombination of the routing codec.
#[derive(Debug, Clone)]
pub struct Patch {
    id: String,
    weights: RoutingWeights,
}

impl Patch {
    pub fn create(id: impl Into<String>, weights: RoutingWeights) -> Self {
        Self {
            id: id.into(),
            weights,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weights(&self) -> &RoutingWeights {
        &self.weights
    }

    /// phi_patch(input): applies this patch's routing weights.
    pub fn apply_local_routing(&self, ring: &Ring, input: &Polynomial) -> Polynomial {
        apply_routing_weights(ring, input, &self.weights)
    }

    /// Character-basis decomposition, exposed for diagnostics and system
    /// assembly.
    pub fn project_to_characters(&self, ring: &Ring, poly: &Polynomial) -> Vec<Polynomial> {
        ring.project_to_all_characters(poly)
    }
}
