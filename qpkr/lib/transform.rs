//! Exact change of representation between the position and momentum bases.
//!
//! Conventions follow the usual discrete Fourier pair: the forward transform
//! (position → momentum) is unnormalized, the inverse transform (momentum →
//! position) carries the factor `1/N`.

use std::{ fmt, sync::Arc };
use ndarray as nd;
use num_complex::Complex64 as C64;
use rustfft as fft;
use crate::{ Arr1, error::DimensionError };

pub type TransformResult<T> = Result<T, DimensionError>;

/// Planned forward/inverse FFT pair for a fixed length `N`.
///
/// Plans are shared behind [`Arc`]s, so cloning is cheap and clones can be
/// handed to other threads.
#[derive(Clone)]
pub struct SpectralTransform {
    n: usize,
    fwd: Arc<dyn fft::Fft<f64>>,
    inv: Arc<dyn fft::Fft<f64>>,
}

impl fmt::Debug for SpectralTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectralTransform").field("n", &self.n).finish()
    }
}

impl SpectralTransform {
    /// Plan transforms of length `n`.
    pub fn new(n: usize) -> Self {
        let mut planner = fft::FftPlanner::new();
        let fwd = planner.plan_fft_forward(n);
        let inv = planner.plan_fft_inverse(n);
        Self { n, fwd, inv }
    }

    /// Get the transform length.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Transform from the position to the momentum representation.
    pub fn forward<S>(&self, v: &Arr1<S>) -> TransformResult<nd::Array1<C64>>
    where S: nd::Data<Elem = C64>
    {
        DimensionError::check(self.n, v)?;
        let mut buf: Vec<C64> = v.iter().copied().collect();
        self.fwd.process(&mut buf);
        Ok(nd::Array1::from_vec(buf))
    }

    /// Transform from the momentum to the position representation.
    pub fn inverse<S>(&self, v: &Arr1<S>) -> TransformResult<nd::Array1<C64>>
    where S: nd::Data<Elem = C64>
    {
        DimensionError::check(self.n, v)?;
        let mut buf: Vec<C64> = v.iter().copied().collect();
        self.inv.process(&mut buf);
        let n = self.n as f64;
        buf.iter_mut().for_each(|bk| { *bk /= n; });
        Ok(nd::Array1::from_vec(buf))
    }

    /// Like [`Self::forward`], but in place.
    pub fn forward_inplace<S>(&self, v: &mut Arr1<S>) -> TransformResult<()>
    where S: nd::DataMut<Elem = C64>
    {
        DimensionError::check(self.n, v)?;
        process_inplace(self.fwd.as_ref(), v);
        Ok(())
    }

    /// Like [`Self::inverse`], but in place.
    pub fn inverse_inplace<S>(&self, v: &mut Arr1<S>) -> TransformResult<()>
    where S: nd::DataMut<Elem = C64>
    {
        DimensionError::check(self.n, v)?;
        process_inplace(self.inv.as_ref(), v);
        let n = self.n as f64;
        v.map_inplace(|vk| { *vk /= n; });
        Ok(())
    }
}

// strided views can't be handed to rustfft directly, so go through a buffer
fn process_inplace<S>(plan: &dyn fft::Fft<f64>, v: &mut Arr1<S>)
where S: nd::DataMut<Elem = C64>
{
    if let Some(slice) = v.as_slice_mut() {
        plan.process(slice);
    } else {
        let mut buf: Vec<C64> = v.iter().copied().collect();
        plan.process(&mut buf);
        v.iter_mut().zip(buf).for_each(|(vk, bk)| { *vk = bk; });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> nd::Array1<C64> {
        (0..n)
            .map(|k| {
                let k = k as f64;
                C64::new((1.3 * k).sin() + 0.2, (0.7 * k * k).cos())
            })
            .collect()
    }

    #[test]
    fn round_trip() {
        for n in [2, 5, 8, 17, 64] {
            let tr = SpectralTransform::new(n);
            let v = sample(n);
            let w = tr.inverse(&tr.forward(&v).unwrap()).unwrap();
            assert!(v.iter().zip(&w).all(|(a, b)| (a - b).norm() < 1e-12));
            let w = tr.forward(&tr.inverse(&v).unwrap()).unwrap();
            assert!(v.iter().zip(&w).all(|(a, b)| (a - b).norm() < 1e-12));
        }
    }

    #[test]
    fn delta_conventions() {
        // a momentum-space delta at p = 0 is a flat position-space state with
        // amplitude 1/N
        let tr = SpectralTransform::new(4);
        let mut psi: nd::Array1<C64> = nd::Array1::zeros(4);
        psi[0] = C64::from(1.0);
        let phi = tr.inverse(&psi).unwrap();
        assert!(phi.iter().all(|z| (z - C64::from(0.25)).norm() < 1e-15));
        let back = tr.forward(&phi).unwrap();
        assert!((back[0] - C64::from(1.0)).norm() < 1e-15);
    }

    #[test]
    fn inplace_matches_owned() {
        let tr = SpectralTransform::new(8);
        let v = sample(8);
        let mut w = v.clone();
        tr.forward_inplace(&mut w).unwrap();
        let f = tr.forward(&v).unwrap();
        assert!(w.iter().zip(&f).all(|(a, b)| (a - b).norm() < 1e-12));

        // strided view
        let mut big = sample(16);
        let mut strided = big.slice_mut(nd::s![..;2]);
        let expected = tr.inverse(&strided.to_owned()).unwrap();
        tr.inverse_inplace(&mut strided).unwrap();
        assert!(
            strided.iter().zip(&expected).all(|(a, b)| (a - b).norm() < 1e-12)
        );
    }

    #[test]
    fn wrong_length() {
        let tr = SpectralTransform::new(8);
        let err = tr.forward(&sample(7)).unwrap_err();
        assert_eq!((err.expected, err.got), (8, 7));
        assert!(tr.inverse(&sample(9)).is_err());
    }
}
