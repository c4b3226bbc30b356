//! TOML-backed run configuration.
//!
//! ```toml
//! [rotor]
//! basis_size = 1024
//! total_time = 500
//! k0 = 6.36
//! hbar = 2.89
//! eps = 0.4
//! w2 = 14.0496
//! w3 = 22.6543
//! pairing = "crossed" # or "direct"
//!
//! [ensemble]
//! configs = 32
//! seed = 10546
//!
//! [otoc]
//! n = 32
//! m = 1.0
//! k = 0.5
//! t = 4
//! ```
//! Every table is optional; phases default to zero.

use std::path::Path;
use ndarray as nd;
use rand::prelude as rnd;
use serde::Deserialize;
use crate::{
    drive::Drive,
    error::ConfigError,
    evolve::{ EvolveResult, Rotor },
    otoc::{ OperatorEvolver, OtocParams, OtocResult },
};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parameters for a [`Rotor`].
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct RotorConfig {
    /// Number of momentum states.
    pub basis_size: usize,
    /// Number of kicks.
    pub total_time: usize,
    /// Drive parameters.
    #[serde(flatten)]
    pub drive: Drive,
}

impl RotorConfig {
    /// Construct the described [`Rotor`].
    pub fn build(&self) -> EvolveResult<Rotor> {
        Rotor::new(self.basis_size, self.total_time, self.drive)
    }
}

/// Phase-averaging parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EnsembleConfig {
    /// Number of phase realizations.
    pub configs: usize,
    /// Seed for the phase generator; drawn from the thread-local generator if
    /// absent.
    pub seed: Option<u64>,
}

impl EnsembleConfig {
    /// Run the phase average on `rotor`.
    pub fn average(&self, rotor: &Rotor) -> EvolveResult<nd::Array1<f64>> {
        match self.seed {
            Some(seed) => rotor.average_over_phases_seeded(self.configs, seed),
            None => {
                let mut rng = rnd::thread_rng();
                rotor.average_over_phases(self.configs, &mut rng)
            },
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    /// State evolution parameters.
    pub rotor: Option<RotorConfig>,
    /// Phase-averaging parameters.
    pub ensemble: Option<EnsembleConfig>,
    /// Operator evolution parameters.
    pub otoc: Option<OtocParams>,
}

impl Config {
    /// Parse from a TOML string, checking all parameters that are present.
    pub fn from_toml(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        if let Some(rotor) = config.rotor.as_ref() { rotor.build()?; }
        if let Some(otoc) = config.otoc.as_ref() { OperatorEvolver::new(*otoc)?; }
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load<P>(path: P) -> ConfigResult<Self>
    where P: AsRef<Path>
    {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml(&s)
    }
}

impl OtocParams {
    /// Construct the described [`OperatorEvolver`].
    pub fn build(&self) -> OtocResult<OperatorEvolver> {
        OperatorEvolver::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        drive::Pairing,
        error::{ EvolveError, OtocError, ParamError },
    };

    const FULL: &str = r#"
        [rotor]
        basis_size = 64
        total_time = 10
        k0 = 2.0
        hbar = 1.5
        eps = 0.4
        w2 = 1.1
        w3 = 2.3
        phi3 = 0.25
        pairing = "direct"

        [ensemble]
        configs = 3
        seed = 99

        [otoc]
        n = 4
        m = 1.0
        k = 0.5
        t = 3
    "#;

    #[test]
    fn full_config() {
        let config = Config::from_toml(FULL).unwrap();
        let rotor = config.rotor.unwrap();
        assert_eq!(rotor.basis_size, 64);
        assert_eq!(rotor.drive.k0, 2.0);
        assert_eq!(rotor.drive.phi2, 0.0);
        assert_eq!(rotor.drive.phi3, 0.25);
        assert_eq!(rotor.drive.pairing, Pairing::Direct);
        let ens = config.ensemble.unwrap();
        assert_eq!(ens, EnsembleConfig { configs: 3, seed: Some(99) });
        let p2 = ens.average(&rotor.build().unwrap()).unwrap();
        assert_eq!(p2.len(), 10);
        let otoc = config.otoc.unwrap();
        let (b, _) = otoc.build().unwrap().evolve_operators().unwrap();
        assert_eq!(b.dim(), (4, 4, 3));
    }

    #[test]
    fn defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        let config = Config::from_toml(
            "[rotor]\nbasis_size = 8\ntotal_time = 2\nk0 = 1.0\nhbar = 1.0\n\
            eps = 0.0\nw2 = 0.0\nw3 = 0.0\n"
        ).unwrap();
        assert_eq!(config.rotor.unwrap().drive.pairing, Pairing::Crossed);
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            Config::from_toml("[rotor]\nbasis_size = 8\n"),
            Err(ConfigError::Toml(_)),
        ));
        assert!(matches!(
            Config::from_toml(
                "[rotor]\nbasis_size = 8\ntotal_time = 2\nk0 = 1.0\n\
                hbar = -1.0\neps = 0.0\nw2 = 0.0\nw3 = 0.0\n"
            ),
            Err(ConfigError::Evolve(EvolveError::Param(ParamError::Hbar(_)))),
        ));
        assert!(matches!(
            Config::from_toml("[otoc]\nn = 1\nm = 1.0\nk = 0.5\nt = 3\n"),
            Err(ConfigError::Otoc(OtocError::Param(ParamError::BasisSize(1)))),
        ));
        assert!(matches!(
            Config::load("/nonexistent/qpkr.toml"),
            Err(ConfigError::Io(_)),
        ));
    }
}
