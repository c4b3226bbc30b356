//! The classical kicked rotor, i.e. the Chirikov standard map
//! ```text
//! p' = p + K sin(θ)
//! θ' = θ + p'
//! ```

use std::f64::consts::TAU;
use anyhow::{ bail, Result };
use ndarray as nd;
use rand::Rng;

/// A classical kicked rotor with a fixed kicking strength and initial
/// phase-space point `(θ, p)`.
#[derive(Copy, Clone, Debug)]
pub struct KickedRotor {
    k: f64,
    initial: [f64; 2],
}

impl KickedRotor {
    /// Create a new `KickedRotor`. If no initial point is given, one is drawn
    /// uniformly from `[0, 1)²` using `rng`.
    pub fn new<R>(k: f64, initial: Option<[f64; 2]>, rng: &mut R)
        -> Result<Self>
    where R: Rng + ?Sized
    {
        if k.is_nan() || k < 0.0 {
            bail!("kicking strength must be non-negative; got {k}");
        }
        let initial = initial.unwrap_or_else(|| [rng.gen(), rng.gen()]);
        Ok(Self { k, initial })
    }

    /// Get the kicking strength.
    pub fn get_k(&self) -> f64 { self.k }

    /// Get the initial phase-space point.
    pub fn get_initial(&self) -> [f64; 2] { self.initial }

    /// Apply the map once. If `keep_modulus`, both coordinates are reduced
    /// modulo 2π.
    pub fn chirikov_map(&self, point: [f64; 2], keep_modulus: bool) -> [f64; 2] {
        let [theta, p] = point;
        let p_new = p + self.k * theta.sin();
        let theta_new = theta + p_new;
        if keep_modulus {
            [theta_new.rem_euclid(TAU), p_new.rem_euclid(TAU)]
        } else {
            [theta_new, p_new]
        }
    }

    /// Iterate the map, returning a `2 × nsteps` array whose first row is θ
    /// and second row is p. The first column is the initial point.
    pub fn phase_space(&self, nsteps: usize, keep_modulus: bool)
        -> nd::Array2<f64>
    {
        let mut traj: nd::Array2<f64> = nd::Array2::zeros((2, nsteps));
        let mut point = self.initial;
        for mut col in traj.columns_mut() {
            col[0] = point[0];
            col[1] = point[1];
            point = self.chirikov_map(point, keep_modulus);
        }
        traj
    }

    /// Energy-like diffusion series `p² / 2K` over an unreduced trajectory.
    /// For `K = 0` the unscaled `p² / 2` is returned instead.
    pub fn diffusion(&self, nsteps: usize) -> nd::Array1<f64> {
        let traj = self.phase_space(nsteps, false);
        let scale = if self.k > 0.0 { 2.0 * self.k } else { 2.0 };
        traj.row(1).mapv(|p| p.powi(2) / scale)
    }
}
