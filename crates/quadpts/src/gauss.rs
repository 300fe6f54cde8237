//! 1-D Gauss-Legendre nodes and weights.
//!
//! Model
//! - Seed: eigenvalues of the symmetric Jacobi matrix of the Legendre
//!   recurrence (Golub-Welsch), off-diagonal `k / sqrt(4k² - 1)`. Above
//!   `MAX_N1D` nodes the dense eigenproblem is skipped in favour of the
//!   asymptotic guess `cos(π(i + 3/4) / (n + 1/2))`.
//! - Polish: Newton on `P_n` via the three-term recurrence; weights from
//!   `2 / ((1 - x²) P'_n(x)²)`.
//! - Nodes are symmetrized about 0 and mapped affinely onto the interval
//!   spanned by `a` and `b`, in either order.

use nalgebra::{DMatrix, SymmetricEigen};

use crate::cfg::{MAX_N1D, NEWTON_MAX_ITER, NEWTON_TOL};

/// Source of 1-D nodes/weights on an interval.
///
/// Contract: `n` nodes sorted ascending inside `[min(a, b), max(a, b)]`,
/// positive weights summing to `|b - a|`.
pub trait NodesWeights {
    fn nodes_weights(&self, a: f64, b: f64, n: usize) -> (Vec<f64>, Vec<f64>);
}

/// Newton settings for root polishing.
#[derive(Clone, Copy, Debug)]
pub struct GaussCfg {
    pub newton_tol: f64,
    pub max_iter: usize,
}

impl Default for GaussCfg {
    fn default() -> Self {
        Self {
            newton_tol: NEWTON_TOL,
            max_iter: NEWTON_MAX_ITER,
        }
    }
}

/// Gauss-Legendre provider (Golub-Welsch seed + Newton polish).
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussLegendre {
    pub cfg: GaussCfg,
}

impl GaussLegendre {
    #[inline]
    pub fn new(cfg: GaussCfg) -> Self {
        Self { cfg }
    }

    /// Nodes and weights on the reference interval `[-1, 1]`.
    pub fn reference(&self, n: usize) -> (Vec<f64>, Vec<f64>) {
        if n == 0 {
            return (Vec::new(), Vec::new());
        }
        let mut x = if n <= MAX_N1D {
            jacobi_seeds(n)
        } else {
            cosine_seeds(n)
        };
        for xi in x.iter_mut() {
            *xi = newton_root(n, *xi, self.cfg);
        }
        x.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        // roots come in ± pairs; make the pairing exact
        for i in 0..n / 2 {
            let r = 0.5 * (x[n - 1 - i] - x[i]);
            x[i] = -r;
            x[n - 1 - i] = r;
        }
        if n % 2 == 1 {
            x[n / 2] = 0.0;
        }
        let w = x
            .iter()
            .map(|&xi| {
                let (_, dp) = legendre_eval(n, xi);
                2.0 / ((1.0 - xi * xi) * dp * dp)
            })
            .collect();
        (x, w)
    }
}

impl NodesWeights for GaussLegendre {
    fn nodes_weights(&self, a: f64, b: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
        let (t, w) = self.reference(n);
        let half = 0.5 * (b - a).abs();
        let mid = 0.5 * (a + b);
        (
            t.into_iter().map(|ti| mid + half * ti).collect(),
            w.into_iter().map(|wi| half * wi).collect(),
        )
    }
}

/// Eigenvalues of the `n×n` Jacobi matrix for Legendre polynomials.
fn jacobi_seeds(n: usize) -> Vec<f64> {
    let mut j = DMatrix::<f64>::zeros(n, n);
    for k in 1..n {
        let kf = k as f64;
        let beta = kf / (4.0 * kf * kf - 1.0).sqrt();
        j[(k - 1, k)] = beta;
        j[(k, k - 1)] = beta;
    }
    SymmetricEigen::new(j).eigenvalues.iter().copied().collect()
}

fn cosine_seeds(n: usize) -> Vec<f64> {
    let nf = n as f64 + 0.5;
    (0..n)
        .map(|i| (std::f64::consts::PI * (i as f64 + 0.75) / nf).cos())
        .collect()
}

fn newton_root(n: usize, mut x: f64, cfg: GaussCfg) -> f64 {
    for _ in 0..cfg.max_iter {
        let (p, dp) = legendre_eval(n, x);
        if dp == 0.0 {
            break;
        }
        let dx = p / dp;
        x -= dx;
        if dx.abs() < cfg.newton_tol {
            break;
        }
    }
    x
}

/// `(P_n(x), P'_n(x))` by the three-term recurrence. Valid for `|x| < 1`.
pub(crate) fn legendre_eval(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 2..=n {
        let kf = k as f64;
        let p_next = ((2.0 * kf - 1.0) * x * p - (kf - 1.0) * p_prev) / kf;
        p_prev = p;
        p = p_next;
    }
    let dp = (n as f64) * (x * p - p_prev) / (x * x - 1.0);
    (p, dp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_and_three_point_closed_forms() {
        let gl = GaussLegendre::default();
        let (x, w) = gl.reference(2);
        let s = 1.0 / 3.0_f64.sqrt();
        assert!((x[0] + s).abs() < 1e-15 && (x[1] - s).abs() < 1e-15);
        assert!((w[0] - 1.0).abs() < 1e-14 && (w[1] - 1.0).abs() < 1e-14);

        let (x, w) = gl.reference(3);
        let r = (3.0 / 5.0_f64).sqrt();
        assert!((x[0] + r).abs() < 1e-15);
        assert_eq!(x[1], 0.0);
        assert!((x[2] - r).abs() < 1e-15);
        assert!((w[0] - 5.0 / 9.0).abs() < 1e-14);
        assert!((w[1] - 8.0 / 9.0).abs() < 1e-14);
    }

    #[test]
    fn single_point_is_midpoint() {
        let (x, w) = GaussLegendre::default().nodes_weights(2.0, 6.0, 1);
        assert_eq!(x.len(), 1);
        assert!((x[0] - 4.0).abs() < 1e-15);
        assert!((w[0] - 4.0).abs() < 1e-15);
    }

    #[test]
    fn sorted_and_weights_sum_to_length() {
        let gl = GaussLegendre::default();
        for n in 1..=12 {
            let (x, w) = gl.nodes_weights(-0.5, 3.0, n);
            assert_eq!(x.len(), n);
            assert_eq!(w.len(), n);
            assert!(x.windows(2).all(|p| p[0] < p[1]), "n={n} not sorted");
            assert!(x.iter().all(|&xi| xi > -0.5 && xi < 3.0));
            let sum: f64 = w.iter().sum();
            assert!((sum - 3.5).abs() < 1e-13, "n={n} sum={sum}");
        }
    }

    #[test]
    fn reversed_interval_matches_forward() {
        let gl = GaussLegendre::default();
        for n in [1, 2, 5, 9] {
            assert_eq!(gl.nodes_weights(3.0, -0.5, n), gl.nodes_weights(-0.5, 3.0, n));
        }
        let (x, w) = gl.nodes_weights(1.0, -1.0, 4);
        assert!(x.windows(2).all(|p| p[0] < p[1]));
        assert!(w.iter().all(|&wi| wi > 0.0));
    }

    #[test]
    fn large_n_uses_cosine_seeds() {
        let gl = GaussLegendre::default();
        let n = 4 * MAX_N1D + 1;
        let (x, w) = gl.reference(n);
        assert_eq!(x.len(), n);
        assert!(x.windows(2).all(|p| p[0] < p[1]));
        assert_eq!(x[n / 2], 0.0);
        let sum: f64 = w.iter().sum();
        assert!((sum - 2.0).abs() < 1e-10, "sum={sum}");
        let second: f64 = x.iter().zip(&w).map(|(xi, wi)| wi * xi * xi).sum();
        assert!((second - 2.0 / 3.0).abs() < 1e-10);
        // the two seeding paths agree where both apply
        let (xs, _) = gl.reference(MAX_N1D);
        let mut polished: Vec<f64> = cosine_seeds(MAX_N1D)
            .into_iter()
            .map(|x0| newton_root(MAX_N1D, x0, gl.cfg))
            .collect();
        polished.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (a, b) in xs.iter().zip(&polished) {
            assert!((a - b).abs() < 1e-13);
        }
    }

    #[test]
    fn integrates_monomials_up_to_2n_minus_1() {
        let gl = GaussLegendre::default();
        for n in 1..=8 {
            let (x, w) = gl.reference(n);
            for deg in 0..=(2 * n - 1) {
                let approx: f64 = x
                    .iter()
                    .zip(&w)
                    .map(|(xi, wi)| wi * xi.powi(deg as i32))
                    .sum();
                let exact = if deg % 2 == 1 {
                    0.0
                } else {
                    2.0 / (deg as f64 + 1.0)
                };
                assert!(
                    (approx - exact).abs() < 1e-13,
                    "n={n} deg={deg}: {approx} vs {exact}"
                );
            }
        }
    }

    #[test]
    fn empty_request() {
        let (x, w) = GaussLegendre::default().nodes_weights(-1.0, 1.0, 0);
        assert!(x.is_empty() && w.is_empty());
    }
}
