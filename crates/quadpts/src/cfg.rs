//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; the 1-D provider exposes its own knobs through `GaussCfg`.

/// Newton step size below which a Legendre root counts as converged.
pub(crate) const NEWTON_TOL: f64 = 1e-15;
/// Hard cap on Newton iterations per root.
pub(crate) const NEWTON_MAX_ITER: usize = 100;
/// Largest supported spatial dimension.
pub(crate) const MAX_DIM: usize = 3;
/// Largest number of Gauss-Legendre nodes per axis a tensor rule may request.
/// Beyond this a 3-D set no longer fits a reasonable allocation.
pub(crate) const MAX_N1D: usize = 64;
