use nalgebra::{DMatrix, DVector};

use crate::errors::SheafError;

/// Solves min_w ||A w - b||^2 by singular value decomposition and returns
/// the minimizer together with the squared residual.
///
/// SVD keeps the solve well-behaved for the flat, underdetermined systems
/// the router assembles (few training rows, characters x degree unknowns);
/// rank-deficient systems get the minimum-norm solution instead of a
/// normal-equations blowup.
pub fn lstsq(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<(DVector<f64>, f64), SheafError> {
    if a.nrows() == 0 || a.ncols() == 0 {
        return Err(SheafError::DegenerateSystem {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    debug_assert!(
        b.len() == a.nrows(),
        "invalid rhs: b.len() = {} != a.nrows() = {}",
        b.len(),
        a.nrows()
    );

    let w: DVector<f64> = a
        .clone()
        .svd(true, true)
        .solve(b, f64::EPSILON)
        .map_err(|e| SheafError::Solver(e.to_string()))?;

    if !w.iter().all(|x| x.is_finite()) {
        return Err(SheafError::Solver("non-finite solution".to_string()));
    }

    let residual: f64 = (a * &w - b).norm_squared();
    Ok((w, residual))
}
