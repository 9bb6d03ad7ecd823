use nalgebra::{DMatrix, DVector};
use ring::{Polynomial, Ring};
use routing::codec::{apply_routing_weights, encode_route};
use routing::{RoutingExample, RoutingWeights};

use crate::errors::SheafError;
use crate::gluing::GluingConstraint;
use crate::patch::Patch;
use crate::solver::lstsq;

/// Network definition handed to the router: regions, boundary assertions,
/// and training data.
#[derive(Debug, Clone)]
pub struct RoutingProblem {
    pub patches: Vec<Patch>,
    pub gluings: Vec<GluingConstraint>,
    pub examples: Vec<RoutingExample>,
}

/// Outcome of a global solve: learned weights per patch, the squared
/// residual of the sheaf system (the cohomological obstruction), and
/// whether it was small enough to call the network consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingResult {
    pub patch_weights: Vec<RoutingWeights>,
    pub obstruction: f64,
    pub success: bool,
}

/// Obstruction threshold below which the learned system is considered
/// consistent, and the boundary tolerance used while routing.
const CONSISTENCY_TOLERANCE: f64 = 1e-6;

/// Assembles one linear system from per-patch training data and gluing
/// constraints, solves it once, and routes messages through the patch
/// chain, certifying boundary agreement.
///
/// State machine: constructed routers are unlearned; a successful
/// [`SheafRouter::learn_routing`] caches the result, after which
/// [`SheafRouter::route`] and [`SheafRouter::verify_consistency`] are
/// read-only.
pub struct SheafRouter<'r> {
    ring: &'r Ring,
    problem: RoutingProblem,
    learned: Option<RoutingResult>,
}

impl<'r> SheafRouter<'r> {
    pub fn create(ring: &'r Ring, problem: RoutingProblem) -> Result<Self, SheafError> {
        if problem.patches.is_empty() {
            return Err(SheafError::NoPatches);
        }
        Ok(Self {
            ring,
            problem,
            learned: None,
        })
    }

    pub fn problem(&self) -> &RoutingProblem {
        &self.problem
    }

    pub fn last_result(&self) -> Option<&RoutingResult> {
        self.learned.as_ref()
    }

    /// Single global solve: local design rows from the training examples,
    /// one linearized continuity row per gluing constraint (rhs zero),
    /// least squares over the shared weight vector, residual reported as
    /// the obstruction.
    pub fn learn_routing(&mut self) -> Result<RoutingResult, SheafError> {
        let width: usize = self.ring.characters() * self.ring.degree();

        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut rhs: Vec<f64> = Vec::new();

        self.assemble_local_system(&mut rows, &mut rhs);
        for gluing in &self.problem.gluings {
            rows.push(self.gluing_row(gluing));
            rhs.push(0.0);
        }

        let cols: usize = rows.first().map_or(0, |row| row.len());
        if rows.is_empty() || cols == 0 {
            return Err(SheafError::DegenerateSystem {
                rows: rows.len(),
                cols,
            });
        }
        debug_assert!(rows.iter().all(|row| row.len() == cols));

        let a: DMatrix<f64> =
            DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j]);
        let b: DVector<f64> = DVector::from_vec(rhs);
        let (w, obstruction) = lstsq(&a, &b)?;

        // Shared weight vector, one copy per patch. The trivial fallback
        // system (no examples, no gluings) carries no weight information,
        // so patches keep uniform defaults in that case.
        let weights: RoutingWeights = if cols == width {
            self.unpack_weights(&w)
        } else {
            RoutingWeights::uniform(self.ring.degree(), self.ring.characters())
        };
        let result: RoutingResult = RoutingResult {
            patch_weights: vec![weights; self.problem.patches.len()],
            obstruction,
            success: obstruction < CONSISTENCY_TOLERANCE,
        };

        self.learned = Some(result.clone());
        Ok(result)
    }

    /// Routes a message through every patch in order, then checks each
    /// gluing constraint against the final value. Requires a prior
    /// successful [`SheafRouter::learn_routing`].
    pub fn route(
        &self,
        message: &Polynomial,
        source_id: &Polynomial,
        dest_id: &Polynomial,
    ) -> Result<Polynomial, SheafError> {
        if self.learned.is_none() {
            return Err(SheafError::NotLearned);
        }

        let mut routed: Polynomial = encode_route(self.ring, source_id, dest_id, message);
        for patch in &self.problem.patches {
            routed = patch.apply_local_routing(self.ring, &routed);
        }

        for gluing in &self.problem.gluings {
            if !gluing.verify(&routed, CONSISTENCY_TOLERANCE) {
                return Err(SheafError::GluingViolated {
                    patch_a: gluing.patch_a().to_string(),
                    patch_b: gluing.patch_b().to_string(),
                });
            }
        }

        Ok(routed)
    }

    /// Returns the stored obstruction; callers compare it against their own
    /// tolerance.
    pub fn verify_consistency(&self, result: &RoutingResult, _tolerance: f64) -> f64 {
        result.obstruction
    }

    /// One design row per training example: the example's character
    /// projections flattened projection-major, targeting the first
    /// coefficient of its expected output. Falls back to a trivial
    /// identity row when there are no examples, widened to the unknown
    /// count whenever gluing rows will follow.
    fn assemble_local_system(&self, rows: &mut Vec<Vec<f64>>, rhs: &mut Vec<f64>) {
        let n: usize = self.ring.degree();
        let width: usize = self.ring.characters() * n;

        for example in &self.problem.examples {
            let mut row: Vec<f64> = Vec::with_capacity(width);
            for projection in self.ring.project_to_all_characters(&example.message) {
                row.extend(projection.coefficients().iter().map(|&c| c as f64));
            }
            rows.push(row);
            rhs.push(example.expected_output.coefficients()[0] as f64);
        }

        if rows.is_empty() {
            let fallback_width: usize = if self.problem.gluings.is_empty() {
                1
            } else {
                width
            };
            let mut row: Vec<f64> = vec![0.0; fallback_width];
            row[0] = 1.0;
            rows.push(row);
            rhs.push(1.0);
        }
    }

    /// Linearized continuity row for phi_b(phi_a(boundary)) = boundary.
    ///
    /// The composed residual is bilinear in the shared weights, so it is
    /// linearized at the uniform reference weights w0: with u0 the boundary
    /// pushed through w0, the row entry for unknown w[p][j] is
    /// proj_j(u0)[p] - proj_j(boundary)[p], and the rhs is zero. The row
    /// vanishes exactly when the weights act identically on the boundary
    /// and its reference image.
    fn gluing_row(&self, gluing: &GluingConstraint) -> Vec<f64> {
        let n: usize = self.ring.degree();
        let k: usize = self.ring.characters();

        let reference: RoutingWeights = RoutingWeights::uniform(n, k);
        let pushed: Polynomial = apply_routing_weights(self.ring, gluing.boundary(), &reference);

        let pushed_proj: Vec<Polynomial> = self.ring.project_to_all_characters(&pushed);
        let boundary_proj: Vec<Polynomial> =
            self.ring.project_to_all_characters(gluing.boundary());

        let mut row: Vec<f64> = Vec::with_capacity(k * n);
        for (q, p) in pushed_proj.iter().zip(boundary_proj.iter()) {
            for (&qc, &pc) in q.coefficients().iter().zip(p.coefficients().iter()) {
                row.push(qc as f64 - pc as f64);
            }
        }
        row
    }

    /// Reshapes the projection-major solution vector to
    /// [position][character].
    fn unpack_weights(&self, w: &DVector<f64>) -> RoutingWeights {
        let n: usize = self.ring.degree();
        let k: usize = self.ring.characters();
        debug_assert!(w.len() == k * n);

        let mut weights: Vec<Vec<f64>> = vec![vec![0.0; k]; n];
        for j in 0..k {
            for (p, row) in weights.iter_mut().enumerate() {
                row[j] = w[j * n + p];
            }
        }
        RoutingWeights::from_rows(weights)
    }
}
