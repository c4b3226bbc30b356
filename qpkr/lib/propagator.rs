//! Diagonal half-step multipliers for the split Floquet operator.
//!
//! The kinetic factor is diagonal in the momentum representation and the
//! potential factor in the position representation:
//! ```text
//! U_p = exp(-i s p² / 2)      U_p† = exp(+i s p² / 2)
//! U_x = exp(-i K cos(x))      U_x† = exp(+i K cos(x))
//! ```
//! where `s` is `ħ` for state evolution and a mass-like scale `M` for operator
//! evolution. Grid entries may be complex (evolved Heisenberg operators are),
//! in which case the exponentials are evaluated by analytic continuation.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, error::ShapeError };

// exp(i z) for complex z
fn cis(z: C64) -> C64 { (C64::i() * z).exp() }

/// Kinetic multiplier `exp(-i s p² / 2)` over a momentum grid.
pub fn kinetic<S, A>(p: &Arr1<S>, scale: f64) -> nd::Array1<C64>
where
    S: nd::Data<Elem = A>,
    A: Copy + Into<C64>,
{
    p.mapv(|pk| { let pk: C64 = pk.into(); cis(-scale * pk * pk / 2.0) })
}

/// Conjugate kinetic multiplier `exp(+i s p² / 2)`.
pub fn kinetic_dagger<S, A>(p: &Arr1<S>, scale: f64) -> nd::Array1<C64>
where
    S: nd::Data<Elem = A>,
    A: Copy + Into<C64>,
{
    p.mapv(|pk| { let pk: C64 = pk.into(); cis(scale * pk * pk / 2.0) })
}

/// Potential multiplier `exp(-i K cos(x))` over a position grid.
pub fn potential<S, A>(x: &Arr1<S>, k: f64) -> nd::Array1<C64>
where
    S: nd::Data<Elem = A>,
    A: Copy + Into<C64>,
{
    x.mapv(|xk| { let xk: C64 = xk.into(); cis(-k * xk.cos()) })
}

/// Conjugate potential multiplier `exp(+i K cos(x))`.
pub fn potential_dagger<S, A>(x: &Arr1<S>, k: f64) -> nd::Array1<C64>
where
    S: nd::Data<Elem = A>,
    A: Copy + Into<C64>,
{
    x.mapv(|xk| { let xk: C64 = xk.into(); cis(k * xk.cos()) })
}

/// Both half-step multipliers for a single kick.
#[derive(Clone, Debug)]
pub struct HalfSteps {
    /// Kinetic multiplier, momentum representation.
    pub kinetic: nd::Array1<C64>,
    /// Potential multiplier, position representation.
    pub potential: nd::Array1<C64>,
}

impl HalfSteps {
    /// Build multipliers for kicking strength `k` and kinetic scale `scale`.
    pub fn new<S, T, A, B>(x: &Arr1<S>, p: &Arr1<T>, k: f64, scale: f64)
        -> Result<Self, ShapeError>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
        A: Copy + Into<C64>,
        B: Copy + Into<C64>,
    {
        ShapeError::check(x, p)?;
        Ok(Self { kinetic: kinetic(p, scale), potential: potential(x, k) })
    }

    /// Build the conjugate multipliers `exp(+i s p² / 2)`, `exp(+i K cos(x))`.
    ///
    /// Evaluated directly, not as conjugates of [`Self::new`]; the two differ
    /// on complex grids.
    pub fn new_dagger<S, T, A, B>(x: &Arr1<S>, p: &Arr1<T>, k: f64, scale: f64)
        -> Result<Self, ShapeError>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
        A: Copy + Into<C64>,
        B: Copy + Into<C64>,
    {
        ShapeError::check(x, p)?;
        Ok(Self {
            kinetic: kinetic_dagger(p, scale),
            potential: potential_dagger(x, k),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BasisGrids;

    #[test]
    fn unit_modulus_on_real_grids() {
        let g = BasisGrids::new(16).unwrap();
        let h = HalfSteps::new(g.get_x(), g.get_p(), 1.3, 0.7).unwrap();
        assert!(h.kinetic.iter().all(|z| (z.norm() - 1.0).abs() < 1e-14));
        assert!(h.potential.iter().all(|z| (z.norm() - 1.0).abs() < 1e-14));
        // on real grids the daggers are plain complex conjugates
        let hd = HalfSteps::new_dagger(g.get_x(), g.get_p(), 1.3, 0.7).unwrap();
        assert!(
            h.kinetic.iter().zip(&hd.kinetic)
                .all(|(a, b)| (a.conj() - b).norm() < 1e-14)
        );
        assert!(
            h.potential.iter().zip(&hd.potential)
                .all(|(a, b)| (a.conj() - b).norm() < 1e-14)
        );
    }

    #[test]
    fn dagger_inverts_on_complex_grids() {
        let x: nd::Array1<C64> = nd::array![C64::new(0.3, 0.2), C64::new(1.1, -0.4)];
        let p: nd::Array1<C64> = nd::array![C64::new(1.0, 0.5), C64::new(-2.0, 0.1)];
        let h = HalfSteps::new(&x, &p, 0.9, 0.6).unwrap();
        let hd = HalfSteps::new_dagger(&x, &p, 0.9, 0.6).unwrap();
        let one = C64::from(1.0);
        assert!(
            h.kinetic.iter().zip(&hd.kinetic)
                .all(|(a, b)| (a * b - one).norm() < 1e-12)
        );
        assert!(
            h.potential.iter().zip(&hd.potential)
                .all(|(a, b)| (a * b - one).norm() < 1e-12)
        );
        // not simply the conjugate once the grids leave the real axis
        assert!((h.kinetic[0].conj() - hd.kinetic[0]).norm() > 1e-3);
    }

    #[test]
    fn values() {
        let p = nd::array![2.0];
        let x = nd::array![0.0];
        let u = kinetic(&p, 0.5);
        assert!((u[0] - C64::cis(-1.0)).norm() < 1e-14);
        let u = potential(&x, 0.8);
        assert!((u[0] - C64::cis(-0.8)).norm() < 1e-14);
    }

    #[test]
    fn complex_grids() {
        // real-valued complex entries agree with the real evaluation
        let p: nd::Array1<C64> = nd::array![C64::from(3.0), C64::from(-1.0)];
        let pr = nd::array![3.0, -1.0];
        assert!(
            kinetic(&p, 1.0).iter().zip(&kinetic(&pr, 1.0))
                .all(|(a, b)| (a - b).norm() < 1e-14)
        );
    }

    #[test]
    fn mismatched_grids() {
        let x = nd::array![0.0, 1.0, 2.0];
        let p = nd::array![0.0, 1.0];
        assert!(matches!(
            HalfSteps::new(&x, &p, 1.0, 1.0),
            Err(ShapeError(3, 2)),
        ));
        assert!(matches!(
            HalfSteps::new_dagger(&x, &p, 1.0, 1.0),
            Err(ShapeError(3, 2)),
        ));
    }
}
