use nalgebra::{DMatrix, DVector};
use ring::{Polynomial, Ring};

use crate::errors::RoutingError;

/// Wreath-style routing weights: one row of character weights per network
/// position. Either uniform-default or solver-assigned; owned outright by
/// whoever routes with them.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingWeights {
    weights: Vec<Vec<f64>>,
}

impl RoutingWeights {
    /// Uniform 1/k weights at every position.
    pub fn uniform(positions: usize, characters: usize) -> Self {
        debug_assert!(characters > 0);
        Self {
            weights: vec![vec![1.0 / characters as f64; characters]; positions],
        }
    }

    pub fn from_rows(weights: Vec<Vec<f64>>) -> Self {
        if let Some(first) = weights.first() {
            debug_assert!(
                weights.iter().all(|row| row.len() == first.len()),
                "invalid weights: ragged rows"
            );
        }
        Self { weights }
    }

    pub fn num_positions(&self) -> usize {
        self.weights.len()
    }

    pub fn num_characters(&self) -> usize {
        self.weights.first().map_or(0, |row| row.len())
    }

    #[inline(always)]
    pub fn at(&self, position: usize, character: usize) -> f64 {
        self.weights[position][character]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.weights
    }
}

/// Training example for the weight learners.
#[derive(Debug, Clone)]
pub struct RoutingExample {
    pub source: Polynomial,
    pub destination: Polynomial,
    pub message: Polynomial,
    pub expected_output: Polynomial,
}

/// Additively masks the message with the destination identity. The relay
/// only ever sees the sum. `source` is accepted but not folded in: the
/// additive scheme reserves it as the hook for signed or keyed variants.
pub fn encode_route(
    ring: &Ring,
    source: &Polynomial,
    destination: &Polynomial,
    message: &Polynomial,
) -> Polynomial {
    let _ = source;
    ring.add(message, destination)
}

/// Strips the destination mask. Yields the original message exactly when
/// `my_id` equals the destination used at encode time; no integrity check
/// happens at this layer (that belongs to an external signature mechanism).
pub fn extract_message(ring: &Ring, routed: &Polynomial, my_id: &Polynomial) -> Polynomial {
    ring.sub(routed, my_id)
}

/// Position-weighted recombination of character projections:
/// output[p] = round(sum_j w[p][j] * proj_j(input)[p]), other slots zero.
///
/// If the weight matrix's character dimension does not match the ring's
/// projection count, the input is returned unchanged.
pub fn apply_routing_weights(
    ring: &Ring,
    input: &Polynomial,
    weights: &RoutingWeights,
) -> Polynomial {
    let projections: Vec<Polynomial> = ring.project_to_all_characters(input);
    if projections.len() != weights.num_characters() {
        return input.clone();
    }

    let n: usize = ring.degree();
    let mut out: Vec<i64> = vec![0i64; n];
    for p in 0..weights.num_positions().min(n) {
        let mut weighted: f64 = 0.0;
        for (j, projection) in projections.iter().enumerate() {
            weighted += weights.at(p, j) * projection.coefficients()[p] as f64;
        }
        out[p] = weighted.round() as i64;
    }
    ring.from_coefficients(&out)
}

/// Per-example weight learner used when no gluing constraints exist: for
/// each position p it solves min_w sum_e (sum_j w[j] * proj_e[j][p] -
/// expected_e[p])^2 in closed form. Distinct from the sheaf router's single
/// global solve.
pub fn learn_routing_weights(
    ring: &Ring,
    examples: &[RoutingExample],
    num_positions: usize,
    num_characters: usize,
) -> Result<RoutingWeights, RoutingError> {
    if examples.is_empty() {
        return Err(RoutingError::NoExamples);
    }
    if num_positions == 0
        || num_positions > ring.degree()
        || num_characters != ring.characters()
    {
        return Err(RoutingError::InvalidDimensions {
            positions: num_positions,
            characters: num_characters,
            degree: ring.degree(),
            ring_characters: ring.characters(),
        });
    }

    let projections: Vec<Vec<Polynomial>> = examples
        .iter()
        .map(|e| ring.project_to_all_characters(&e.message))
        .collect();

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(num_positions);
    for p in 0..num_positions {
        let a: DMatrix<f64> = DMatrix::from_fn(examples.len(), num_characters, |e, j| {
            projections[e][j].coefficients()[p] as f64
        });
        let b: DVector<f64> = DVector::from_fn(examples.len(), |e, _| {
            examples[e].expected_output.coefficients()[p] as f64
        });
        let w: DVector<f64> = a
            .svd(true, true)
            .solve(&b, f64::EPSILON)
            .map_err(|e| RoutingError::Solver(e.to_string()))?;
        rows.push(w.iter().copied().collect());
    }

    Ok(RoutingWeights::from_rows(rows))
}
