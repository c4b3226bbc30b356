//! Heisenberg-picture evolution of the (diagonal) position and momentum
//! operators and the trace-based OTOC proxy built from them.
//!
//! At every step `i`, the current momentum-operator diagonal `p_i` seeds the
//! coefficient matrix
//! ```text
//! b[r, s] = i (r - s) p_i[s]
//! ```
//! from which `c = b b†` and `Tr c` are computed. Both operators are then
//! conjugated by the split Floquet operator `F` to give `p_{i+1}` and
//! `x_{i+1}`:
//! ```text
//! position:   F = U_x ∘ F⁻¹[U_p]          F† = F⁻¹[U_p† ∘ F[U_x†]]
//! momentum:   F = F[U_x ∘ F⁻¹[U_p]]       F† = U_p† ∘ F[U_x†]
//! O' = F† ∘ O ∘ F
//! ```
//! where `∘` is the elementwise product, `F[·]`/`F⁻¹[·]` are the forward and
//! inverse [spectral transforms][SpectralTransform], and the multipliers
//! `U_p`, `U_x` use the mass-like scale `M` and kicking strength `K`.
//!
//! All 3D arrays are indexed `[row, column, step]`; all 2D operator histories
//! are indexed `[step, basis index]`. The slot for the final step is left at
//! zero since no step follows it.
//!
//! The evolved diagonals leave the real axis after the first step, and the
//! multipliers then grow exponentially in their imaginary parts. Nothing is
//! rescaled: for `N = 32`, `K = 0.5`, `M = 1` the trace overflows to NaN from
//! the fourth step on, so runs are only meaningful over a few steps.

use std::str::FromStr;
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::Deserialize;
use crate::{
    Arr1,
    Arr2,
    error::{ BasisError, DimensionError, OtocError, ParamError },
    grid::BasisGrids,
    propagator::HalfSteps,
    transform::SpectralTransform,
};

pub type OtocResult<T> = Result<T, OtocError>;

/// Natural basis of the operator being evolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    /// Position operator.
    Position,
    /// Momentum operator.
    Momentum,
}

/// Parses `"position"` or `"momentum"`, for callers selecting a basis from
/// string input (e.g. the command line); anything else is a [`BasisError`].
impl FromStr for Basis {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" => Ok(Self::Position),
            "momentum" => Ok(Self::Momentum),
            _ => Err(BasisError(s.to_string())),
        }
    }
}

/// Operator-evolution parameters.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct OtocParams {
    /// Basis size.
    pub n: usize,
    /// Mass-like kinetic scale.
    pub m: f64,
    /// Kicking strength.
    pub k: f64,
    /// Number of steps (including the initial one).
    pub t: usize,
}

impl OtocParams {
    /// Check that all parameters are in range.
    pub fn check(&self) -> Result<(), ParamError> {
        ParamError::check_basis_size(self.n)?;
        ParamError::check_mass(self.m)?;
        ParamError::check_kick(self.k)?;
        ParamError::check_total_time(self.t)?;
        Ok(())
    }
}

/// The Toeplitz matrix `i (r - s)` of size `n × n`.
pub fn coeff_b(n: usize) -> nd::Array2<C64> {
    nd::Array2::from_shape_fn(
        (n, n), |(r, s)| C64::new(0.0, r as f64 - s as f64))
}

/// Coefficient matrix `b[r, s] = i (r - s) p[s]`.
pub fn coeff_matrix<S>(p: &Arr1<S>) -> nd::Array2<C64>
where S: nd::Data<Elem = C64>
{
    let mut b = coeff_b(p.len());
    b.rows_mut().into_iter()
        .for_each(|mut row| { row *= p; });
    b
}

/// Gram-type product `b b†`.
pub fn gram<S>(b: &Arr2<S>) -> nd::Array2<C64>
where S: nd::Data<Elem = C64>
{
    let b_dag: nd::Array2<C64> = b.t().mapv(|z| z.conj());
    b.dot(&b_dag)
}

/// Conjugate a diagonal operator by one split Floquet period.
///
/// `x` and `p` are the current position and momentum operator diagonals used
/// to build the multipliers.
pub fn evolve_operator<S, T, U>(
    transform: &SpectralTransform,
    operator: &Arr1<S>,
    basis: Basis,
    x: &Arr1<T>,
    p: &Arr1<U>,
    m: f64,
    k: f64,
) -> OtocResult<nd::Array1<C64>>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
    U: nd::Data<Elem = C64>,
{
    let HalfSteps { kinetic: up, potential: ux } = HalfSteps::new(x, p, k, m)?;
    let HalfSteps { kinetic: up_dag, potential: ux_dag }
        = HalfSteps::new_dagger(x, p, k, m)?;
    DimensionError::check(x.len(), operator)?;
    DimensionError::check(transform.len(), operator)?;
    let (f, f_dag)
        = match basis {
            Basis::Position => {
                let f = ux * transform.inverse(&up)?;
                let f_dag
                    = transform.inverse(&(up_dag * transform.forward(&ux_dag)?))?;
                (f, f_dag)
            },
            Basis::Momentum => {
                let f = transform.forward(&(ux * transform.inverse(&up)?))?;
                let f_dag = up_dag * transform.forward(&ux_dag)?;
                (f, f_dag)
            },
        };
    Ok(f_dag * operator * f)
}

/// Output of [`OperatorEvolver::evolve_full`].
#[derive(Clone, Debug)]
pub struct OtocData {
    /// Coefficient matrices, shape `N × N × T`.
    pub b: nd::Array3<C64>,
    /// Gram matrices `b b†`, shape `N × N × T`.
    pub c: nd::Array3<C64>,
    /// `Tr c` at every step, length `T`.
    pub c_trace: nd::Array1<f64>,
    /// Position operator diagonals, shape `T × N`.
    pub x: nd::Array2<C64>,
    /// Momentum operator diagonals, shape `T × N`.
    pub p: nd::Array2<C64>,
}

/// Evolves the position and momentum operators of a kicked rotor and records
/// the OTOC proxy at every step.
#[derive(Clone, Debug)]
pub struct OperatorEvolver {
    params: OtocParams,
    grids: BasisGrids,
    transform: SpectralTransform,
}

impl OperatorEvolver {
    /// Create a new `OperatorEvolver`.
    pub fn new(params: OtocParams) -> OtocResult<Self> {
        params.check()?;
        let grids = BasisGrids::new(params.n)?;
        let transform = SpectralTransform::new(params.n);
        Ok(Self { params, grids, transform })
    }

    /// Get the parameters.
    pub fn get_params(&self) -> &OtocParams { &self.params }

    /// Evolve over all steps, returning every recorded quantity.
    pub fn evolve_full(&self) -> OtocResult<OtocData> {
        let OtocParams { n, m, k, t } = self.params;
        log::debug!("evolving operators: n = {n}, m = {m}, k = {k}, t = {t}");
        let mut x: nd::Array2<C64> = nd::Array2::zeros((t, n));
        let mut p: nd::Array2<C64> = nd::Array2::zeros((t, n));
        x.row_mut(0).assign(&self.grids.get_x().mapv(C64::from));
        p.row_mut(0).assign(&self.grids.get_p().mapv(C64::from));
        let mut b_tensor: nd::Array3<C64> = nd::Array3::zeros((n, n, t));
        let mut c_tensor: nd::Array3<C64> = nd::Array3::zeros((n, n, t));
        let mut c_trace: nd::Array1<f64> = nd::Array1::zeros(t);
        for i in 0..t.saturating_sub(1) {
            let b = coeff_matrix(&p.row(i));
            let c = gram(&b);
            c_trace[i] = c.diag().sum().re;
            log::debug!("step {i}: Tr(c) = {:.6e}", c_trace[i]);
            let p_next = evolve_operator(
                &self.transform, &p.row(i), Basis::Momentum,
                &x.row(i), &p.row(i), m, k,
            )?;
            let x_next = evolve_operator(
                &self.transform, &x.row(i), Basis::Position,
                &x.row(i), &p.row(i), m, k,
            )?;
            p.row_mut(i + 1).assign(&p_next);
            x.row_mut(i + 1).assign(&x_next);
            b_tensor.slice_mut(nd::s![.., .., i]).assign(&b);
            c_tensor.slice_mut(nd::s![.., .., i]).assign(&c);
        }
        Ok(OtocData { b: b_tensor, c: c_tensor, c_trace, x, p })
    }

    /// Evolve over all steps, returning only the `b` and `c` tensors.
    pub fn evolve_operators(&self)
        -> OtocResult<(nd::Array3<C64>, nd::Array3<C64>)>
    {
        self.evolve_full().map(|data| (data.b, data.c))
    }
}
