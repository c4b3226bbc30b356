//! Momentum and position sample grids for a rotor truncated to `N` basis
//! states.

use std::f64::consts::TAU;
use ndarray as nd;
use crate::{ error::ParamError, utils::fft_freq };

/// Immutable momentum and position grids for a fixed basis size.
///
/// Arrays borrowed from this type are guaranteed to have the same length `N`.
/// Momenta are integers in FFT order, `{0, 1, ..., N/2 - 1, -N/2, ..., -1}`;
/// positions are `N` evenly spaced angles covering `[0, 2π)`.
#[derive(Clone, Debug)]
pub struct BasisGrids {
    // momentum grid
    p: nd::Array1<f64>,
    // position grid
    x: nd::Array1<f64>,
    // array sizes
    n: usize,
}

impl BasisGrids {
    /// Create new grids for `n` basis states.
    pub fn new(n: usize) -> Result<Self, ParamError> {
        ParamError::check_basis_size(n)?;
        let p = fft_freq(n, (n as f64).recip());
        let x: nd::Array1<f64>
            = (0..n).map(|k| TAU * k as f64 / n as f64).collect();
        Ok(Self { p, x, n })
    }

    /// Get a reference to the momentum grid.
    pub fn get_p(&self) -> &nd::Array1<f64> { &self.p }

    /// Get a reference to the position grid.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the basis size.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grids() {
        let g = BasisGrids::new(8).unwrap();
        assert_eq!(g.len(), 8);
        assert_eq!(
            g.get_p().to_vec(),
            vec![0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0],
        );
        assert_eq!(g.get_x().len(), 8);
        assert_eq!(g.get_x()[0], 0.0);
        assert!((g.get_x()[4] - std::f64::consts::PI).abs() < 1e-15);
        assert!(g.get_x().iter().all(|&x| (0.0..TAU).contains(&x)));

        let g = BasisGrids::new(3).unwrap();
        assert_eq!(g.get_p().to_vec(), vec![0.0, 1.0, -1.0]);
    }

    #[test]
    fn too_small() {
        assert!(matches!(BasisGrids::new(1), Err(ParamError::BasisSize(1))));
        assert!(BasisGrids::new(0).is_err());
        assert!(BasisGrids::new(2).is_ok());
    }
}
