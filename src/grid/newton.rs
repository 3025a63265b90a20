use crate::prelude::*;
use log::warn;
use num_traits::Float;

/// Stopping criteria of [`newton_iter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOptions<F> {
    pub max_iter: usize,
    /// converged once `|f(x)|` drops below this
    pub tol: F,
}

impl Default for NewtonOptions<f64> {
    fn default() -> Self {
        Self {
            max_iter: 50,
            tol: 1e-6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult<F> {
    pub root: F,
    pub iterations: usize,
    pub converged: bool,
}

/// Newton iteration on a function returning its value and derivative at `x`.
///
/// The residual is checked before every update, so a starting guess that already
/// satisfies the tolerance is returned untouched. When the iteration cap is hit the
/// last estimate is returned with `converged == false`.
///
/// ```
/// use vicar::grid::{newton_iter, NewtonOptions};
///
/// let sqrt2 = newton_iter(|x: f64| (x * x - 2.0, 2.0 * x), 1.0, NewtonOptions::default());
/// assert!(sqrt2.converged);
/// assert!((sqrt2.root - 2f64.sqrt()).abs() < 1e-6);
/// ```
pub fn newton_iter<F, FDF>(mut fdf: FDF, x0: F, options: NewtonOptions<F>) -> NewtonResult<F>
where
    F: Float,
    FDF: FnMut(F) -> (F, F),
{
    let mut x = x0;

    for iterations in 0..options.max_iter {
        let (fx, dfx) = fdf(x);
        if fx.abs() < options.tol {
            return NewtonResult {
                root: x,
                iterations,
                converged: true,
            };
        }
        x = x - fx / dfx;
    }

    NewtonResult {
        root: x,
        iterations: options.max_iter,
        converged: false,
    }
}

/// Number of cells `N` and growth rate `q` such that `N` cells, starting at `a0` and
/// each `q` times wider than the previous one, exactly cover `length`:
///
/// ```text
/// a0 + a0 q + a0 q^2 + ... + a0 q^(N-1) = length
/// ```
///
/// `N` is estimated from the requested rate `q0` (rounded up, at least 1), then `q` is
/// solved for with Newton iteration so the cells fit exactly. A rate of exactly 1 gives
/// uniform cells.
///
/// ```
/// let (n, q) = vicar::grid::find_n_growth_rate(1.0, 10.0, 1.1).unwrap();
/// assert_eq!(n, 8);
///
/// let covered: f64 = (0..n).map(|i| q.powi(i as i32)).sum();
/// assert!((covered - 10.0).abs() < 1e-5);
/// ```
pub fn find_n_growth_rate(a0: f64, length: f64, q0: f64) -> Result<(usize, f64), Error> {
    let invalid = || Error::from(error::Growth::new(length, a0));

    if !(a0 > 0.0 && length > 0.0 && q0 > 0.0) {
        return Err(invalid());
    }

    let ratio = length / a0;

    if q0 == 1.0 {
        return Ok((ratio.ceil().max(1.0) as usize, 1.0));
    }

    let estimate = (ratio * (q0 - 1.0) + 1.0).ln() / q0.ln();
    if !estimate.is_finite() {
        // a shrinking series that converges before covering `length`
        return Err(invalid());
    }
    let n = estimate.ceil().max(1.0) as usize;

    if n == 1 {
        // a single cell spans everything, the rate is never used
        return Ok((1, q0));
    }

    let nf = n as f64;
    let ni = n as i32;
    let fdf = |q: f64| {
        let qn = q.powi(ni);
        let fx = (qn - 1.0) / (q - 1.0) - ratio;
        let dfx = nf * qn / q / (q - 1.0) - (qn - 1.0) / (q - 1.0).powi(2);
        (fx, dfx)
    };

    let options = NewtonOptions::default();
    let result = newton_iter(fdf, q0, options);
    if !result.converged {
        warn!(
            "growth rate did not converge within {} iterations for {} cells over length {} from spacing {}, using q = {}",
            options.max_iter, n, length, a0, result.root
        );
    }

    Ok((n, result.root))
}
