//! Spectra of the harmonic and quartic oscillators, with position and
//! momentum represented in a number basis truncated to `n` states:
//! ```text
//! x = s / √2 (a + a†)
//! p = i / (s √2) (a† - a)
//! ```
//! Eigenvalues near the top of the truncated spectrum are not meaningful.

use anyhow::Result;
use ndarray as nd;
use ndarray_linalg::{ self as la, EigValshInto };
use num_complex::Complex64 as C64;

/// Choice of potential.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Potential {
    /// `x² / 2`
    Harmonic,
    /// `x⁴ / 2`
    Quartic,
}

/// Position and momentum matrices in the truncated number basis, for length
/// scale `s`.
pub fn xp_operators(n: usize, s: f64) -> (nd::Array2<C64>, nd::Array2<C64>) {
    let mut x: nd::Array2<C64> = nd::Array2::zeros((n, n));
    let mut p: nd::Array2<C64> = nd::Array2::zeros((n, n));
    let ax = C64::from(s / 2.0_f64.sqrt());
    let ap = C64::i() / (s * 2.0_f64.sqrt());
    for k in 1..n {
        let sq = (k as f64).sqrt();
        // a† on the lower diagonal, a on the upper
        x[[k, k - 1]] = ax * sq;
        x[[k - 1, k]] = ax * sq;
        p[[k, k - 1]] = ap * sq;
        p[[k - 1, k]] = -ap * sq;
    }
    (x, p)
}

/// Hamiltonian `p² / 2 + V(x)` in the truncated number basis.
pub fn hamiltonian(n: usize, s: f64, potential: Potential) -> nd::Array2<C64> {
    let (x, p) = xp_operators(n, s);
    let x2 = x.dot(&x);
    let v = match potential {
        Potential::Harmonic => x2 / 2.0,
        Potential::Quartic => x2.dot(&x2) / 2.0,
    };
    p.dot(&p) / 2.0 + v
}

/// Sorted eigenvalues of [`hamiltonian`].
pub fn spectrum(n: usize, s: f64, potential: Potential)
    -> Result<nd::Array1<f64>>
{
    let h = hamiltonian(n, s, potential);
    let evals: nd::Array1<f64> = h.eigvalsh_into(la::UPLO::Lower)?;
    Ok(evals)
}
