use ring::Polynomial;

/// Kind of boundary agreement asserted between two patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GluingKind {
    /// phi_b(phi_a(p)) = p at the boundary.
    Continuity,
    /// A cyclic chain returns to its start.
    Periodicity,
    Custom,
}

/// Boundary-agreement assertion between two patches. The constraint row it
/// contributes to the global system is derived during assembly by the
/// router; the constraint itself only owns the endpoints and the boundary
/// element.
#[derive(Debug, Clone)]
pub struct GluingConstraint {
    patch_a: String,
    patch_b: String,
    boundary: Polynomial,
    kind: GluingKind,
}

impl GluingConstraint {
    /// Continuity constraint between two named patches.
    pub fn continuity(
        patch_a: impl Into<String>,
        patch_b: impl Into<String>,
        boundary: Polynomial,
    ) -> Self {
        Self {
            patch_a: patch_a.into(),
            patch_b: patch_b.into(),
            boundary,
            kind: GluingKind::Continuity,
        }
    }

    /// Periodicity constraint anchoring a cyclic chain on its first and
    /// last patch. An empty chain leaves both anchor ids empty.
    pub fn periodicity(patch_ids: &[String], start_boundary: Polynomial) -> Self {
        let (patch_a, patch_b) = match (patch_ids.first(), patch_ids.last()) {
            (Some(first), Some(last)) => (first.clone(), last.clone()),
            _ => (String::new(), String::new()),
        };
        Self {
            patch_a,
            patch_b,
            boundary: start_boundary,
            kind: GluingKind::Periodicity,
        }
    }

    pub fn custom(
        patch_a: impl Into<String>,
        patch_b: impl Into<String>,
        boundary: Polynomial,
    ) -> Self {
        Self {
            patch_a: patch_a.into(),
            patch_b: patch_b.into(),
            boundary,
            kind: GluingKind::Custom,
        }
    }

    pub fn patch_a(&self) -> &str {
        &self.patch_a
    }

    pub fn patch_b(&self) -> &str {
        &self.patch_b
    }

    pub fn boundary(&self) -> &Polynomial {
        &self.boundary
    }

    pub fn kind(&self) -> GluingKind {
        self.kind
    }

    /// True iff the routed value agrees with the stored boundary: equal
    /// coefficient count and Euclidean distance strictly below `tolerance`.
    pub fn verify(&self, routed: &Polynomial, tolerance: f64) -> bool {
        let routed_coeffs: &[u64] = routed.coefficients();
        let boundary_coeffs: &[u64] = self.boundary.coefficients();
        if routed_coeffs.len() != boundary_coeffs.len() {
            return false;
        }

        let mut error: f64 = 0.0;
        for (&r, &b) in routed_coeffs.iter().zip(boundary_coeffs.iter()) {
            let diff: f64 = r as f64 - b as f64;
            error += diff * diff;
        }
        error.sqrt() < tolerance
    }
}
