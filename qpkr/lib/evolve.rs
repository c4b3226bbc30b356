//! Stroboscopic evolution of a rotor state under the quasi-periodic drive.
//!
//! One Floquet period at kick number `t` takes a momentum-representation state
//! `ψ` to
//! ```text
//! ψ' = F U_x(K(t)) F⁻¹ U_p ψ
//! ```
//! where `F` is the [forward transform][SpectralTransform::forward] and
//! `U_p`, `U_x` are the [half-step multipliers][crate::propagator]. The
//! energy proxy `⟨p²⟩ = Σ p² |ψ'|²` is recorded after every period.
//!
//! States are never renormalized between periods. Accumulated floating-point
//! drift in the total probability is expected to stay well below `1e-8` for
//! realistic run lengths; larger drift is logged as a warning, not corrected.

use std::sync::Arc;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    drive::Drive,
    error::{ DimensionError, EvolveError, ParamError },
    grid::BasisGrids,
    propagator::HalfSteps,
    transform::SpectralTransform,
    utils::{ mean_square, total_prob },
};

pub type EvolveResult<T> = Result<T, EvolveError>;

// total probability drift beyond which a warning is emitted
const NORM_DRIFT_WARN: f64 = 1e-8;

/// Return the momentum eigenstate at rest: all amplitude on `p = 0`.
pub fn zero_state(n: usize) -> nd::Array1<C64> {
    let mut psi: nd::Array1<C64> = nd::Array1::zeros(n);
    if n > 0 { psi[0] = C64::from(1.0); }
    psi
}

/// A quasi-periodically kicked rotor, evolved for a fixed number of kicks.
#[derive(Clone, Debug)]
pub struct Rotor {
    // shared, read-only grids
    grids: Arc<BasisGrids>,
    // number of kicks
    total_time: usize,
    drive: Drive,
    transform: SpectralTransform,
}

impl Rotor {
    /// Create a new `Rotor` with `basis_size` momentum states, evolved over
    /// `total_time` kicks.
    pub fn new(basis_size: usize, total_time: usize, drive: Drive)
        -> EvolveResult<Self>
    {
        let grids = BasisGrids::new(basis_size)?;
        Self::from_grids(Arc::new(grids), total_time, drive)
    }

    /// Create a new `Rotor` on existing grids.
    pub fn from_grids(
        grids: Arc<BasisGrids>,
        total_time: usize,
        drive: Drive,
    ) -> EvolveResult<Self>
    {
        ParamError::check_total_time(total_time)?;
        drive.check()?;
        let transform = SpectralTransform::new(grids.len());
        Ok(Self { grids, total_time, drive, transform })
    }

    /// Return a copy of `self` sharing the same grids, with new phase offsets.
    pub fn with_phases(&self, phi2: f64, phi3: f64) -> Self {
        Self { drive: self.drive.with_phases(phi2, phi3), ..self.clone() }
    }

    /// Get a reference to the grids.
    pub fn get_grids(&self) -> &Arc<BasisGrids> { &self.grids }

    /// Get the drive parameters.
    pub fn get_drive(&self) -> &Drive { &self.drive }

    /// Get the number of kicks.
    pub fn total_time(&self) -> usize { self.total_time }

    /// Get the basis size.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.grids.len() }

    /// Advance a momentum-representation state by the single Floquet period
    /// beginning at kick number `t`.
    pub fn step<S>(&self, psi: &Arr1<S>, t: usize)
        -> EvolveResult<nd::Array1<C64>>
    where S: nd::Data<Elem = C64>
    {
        DimensionError::check(self.len(), psi)?;
        let k = self.drive.strength_at(t);
        let HalfSteps { kinetic: up, potential: ux } = HalfSteps::new(
            self.grids.get_x(), self.grids.get_p(), k, self.drive.hbar)?;
        let mut q: nd::Array1<C64> = up * psi;
        self.transform.inverse_inplace(&mut q)?;
        q *= &ux;
        self.transform.forward_inplace(&mut q)?;
        Ok(q)
    }

    // run all periods from `psi0`, handing every post-step state to `f`
    fn run<F>(&self, psi0: Option<nd::Array1<C64>>, mut f: F)
        -> EvolveResult<(nd::Array1<f64>, nd::Array1<C64>)>
    where F: FnMut(usize, &nd::Array1<C64>)
    {
        let n = self.len();
        let mut psi: nd::Array1<C64>
            = match psi0 {
                Some(psi0) if psi0.len() == n => psi0,
                Some(psi0) => {
                    return Err(ParamError::InitialState {
                        expected: n,
                        got: psi0.len(),
                    }.into());
                },
                None => zero_state(n),
            };
        let norm0 = total_prob(&psi);
        log::debug!(
            "evolving rotor: n = {}, total_time = {}, drive = {:?}",
            n, self.total_time, self.drive,
        );
        let mut p2: nd::Array1<f64> = nd::Array1::zeros(self.total_time);
        for (t, p2t) in p2.iter_mut().enumerate() {
            psi = self.step(&psi, t)?;
            *p2t = mean_square(self.grids.get_p(), &psi);
            log::trace!("t = {t}: <p^2> = {p2t:.6e}");
            f(t, &psi);
        }
        let drift = (total_prob(&psi) - norm0).abs();
        if drift > NORM_DRIFT_WARN * norm0.max(f64::MIN_POSITIVE) {
            log::warn!(
                "total probability drifted by {drift:.3e} over {} kicks",
                self.total_time,
            );
        }
        Ok((p2, psi))
    }

    /// Evolve from the zero-momentum state, returning the energy proxy `⟨p²⟩`
    /// after every kick along with the final state.
    pub fn evolve(&self) -> EvolveResult<(nd::Array1<f64>, nd::Array1<C64>)> {
        self.run(None, |_, _| ())
    }

    /// Like [`Self::evolve`], but starting from `psi0` if given.
    ///
    /// Fails with [`ParamError::InitialState`] if `psi0` doesn't have the
    /// basis size.
    pub fn evolve_with(&self, psi0: Option<nd::Array1<C64>>)
        -> EvolveResult<(nd::Array1<f64>, nd::Array1<C64>)>
    {
        self.run(psi0, |_, _| ())
    }

    /// Evolve from the zero-momentum state, returning `⟨p²⟩` along with every
    /// post-kick state. The first axis of the state array indexes time.
    pub fn evolve_history(&self)
        -> EvolveResult<(nd::Array1<f64>, nd::Array2<C64>)>
    {
        let mut states: nd::Array2<C64>
            = nd::Array2::zeros((self.total_time, self.len()));
        let (p2, _)
            = self.run(None, |t, psi| states.row_mut(t).assign(psi))?;
        Ok((p2, states))
    }
}
