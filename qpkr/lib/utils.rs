//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1, concatenate };
use num_complex::Complex;
use num_traits::Float;

/// Generate an array of frequency-space coordinates to accompany a FFT of `n`
/// points for sampling interval `dt`.
///
/// Ordering follows the FFT output: non-negative frequencies first, then the
/// negative ones in increasing order.
pub fn fft_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    let m = if n % 2 == 0 { n / 2 } else { (n + 1) / 2 };
    let fp: nd::Array1<f64>
        = (0..m)
        .map(|k| k as f64 / (n as f64 * dt))
        .collect();
    let fm: nd::Array1<f64>
        = (1..n - m + 1).rev()
        .map(|k| -(k as f64) / (n as f64 * dt))
        .collect();
    concatenate!(nd::Axis(0), fp, fm)
}

/// Total probability `Σ |q|²` of a discretely sampled state.
pub fn total_prob<S, A>(q: &nd::ArrayBase<S, Ix1>) -> A
where
    S: nd::Data<Elem = Complex<A>>,
    A: Float,
{
    q.iter().fold(A::zero(), |acc, qk| acc + qk.norm_sqr())
}

/// Weighted second moment `Σ w² |q|²` of a state over a real coordinate grid.
///
/// Arrays of unequal length are truncated to the shorter one.
pub fn mean_square<S, T, A>(
    w: &nd::ArrayBase<S, Ix1>,
    q: &nd::ArrayBase<T, Ix1>,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = Complex<A>>,
    A: Float,
{
    w.iter().zip(q)
        .fold(A::zero(), |acc, (wk, qk)| acc + *wk * *wk * qk.norm_sqr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64 as C64;

    #[test]
    fn freq_even_odd() {
        let f8 = fft_freq(8, 1.0 / 8.0);
        assert_eq!(
            f8.to_vec(),
            vec![0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0],
        );
        let f5 = fft_freq(5, 1.0 / 5.0);
        assert_eq!(f5.to_vec(), vec![0.0, 1.0, 2.0, -2.0, -1.0]);
    }

    #[test]
    fn moments() {
        let q = nd::array![C64::new(0.6, 0.0), C64::new(0.0, 0.8)];
        let w = nd::array![1.0, -2.0];
        assert!((total_prob(&q) - 1.0_f64).abs() < 1e-12);
        assert!((mean_square(&w, &q) - (0.36 + 4.0 * 0.64)).abs() < 1e-12);
    }
}
