//! Averaging of the energy proxy over random realizations of the drive phases.
//!
//! Each realization draws fresh `phi2, phi3` uniformly from `[0, 1)`. All
//! `phi2` values are drawn before all `phi3` values, and every draw happens
//! before any evolution, so the result depends only on the state of the
//! supplied generator. Realizations are then evolved in parallel.

use ndarray as nd;
use rand::{ prelude as rnd, Rng };
use rayon::iter::{ IntoParallelIterator, ParallelIterator };
use crate::{
    error::ParamError,
    evolve::{ EvolveResult, Rotor },
};

/// Draw `(phi2, phi3)` pairs for `no_initconfigs` realizations.
pub fn draw_phases<R>(no_initconfigs: usize, rng: &mut R) -> Vec<(f64, f64)>
where R: Rng + ?Sized
{
    let phases2: Vec<f64>
        = (0..no_initconfigs).map(|_| rng.gen::<f64>()).collect();
    let phases3: Vec<f64>
        = (0..no_initconfigs).map(|_| rng.gen::<f64>()).collect();
    phases2.into_iter().zip(phases3).collect()
}

impl Rotor {
    /// Average the energy proxy `⟨p²⟩` over `no_initconfigs` realizations of
    /// the drive phases drawn from `rng`.
    ///
    /// The returned array always has length equal to the number of kicks.
    pub fn average_over_phases<R>(&self, no_initconfigs: usize, rng: &mut R)
        -> EvolveResult<nd::Array1<f64>>
    where R: Rng + ?Sized
    {
        ParamError::check_initconfigs(no_initconfigs)?;
        let phases = draw_phases(no_initconfigs, rng);
        self.average_over(&phases)
    }

    /// Like [`Self::average_over_phases`], using a generator seeded with
    /// `seed`.
    pub fn average_over_phases_seeded(&self, no_initconfigs: usize, seed: u64)
        -> EvolveResult<nd::Array1<f64>>
    {
        let mut rng = <rnd::StdRng as rnd::SeedableRng>::seed_from_u64(seed);
        self.average_over_phases(no_initconfigs, &mut rng)
    }

    /// Average the energy proxy over an explicit set of `(phi2, phi3)`
    /// realizations.
    pub fn average_over(&self, phases: &[(f64, f64)])
        -> EvolveResult<nd::Array1<f64>>
    {
        ParamError::check_initconfigs(phases.len())?;
        log::debug!(
            "averaging over {} phase realizations on {} threads",
            phases.len(),
            rayon::current_num_threads(),
        );
        let runs: Vec<EvolveResult<nd::Array1<f64>>>
            = phases.into_par_iter()
            .map(|&(phi2, phi3)| {
                self.with_phases(phi2, phi3).evolve().map(|(p2, _)| p2)
            })
            .collect();
        // sum in realization order so that results are reproducible
        let mut acc: nd::Array1<f64> = nd::Array1::zeros(self.total_time());
        for run in runs.into_iter() {
            acc += &run?;
        }
        acc /= phases.len() as f64;
        Ok(acc)
    }
}
