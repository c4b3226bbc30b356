//! Quasi-periodically modulated kicking strength.
//!
//! ```text
//! K(t) = K0 (1 + ε cos(ω t + φ2) cos(ω' t + φ3)) / ħ
//! ```
//! where the frequencies `(ω, ω')` are bound to the phases according to a
//! [`Pairing`].

use serde::Deserialize;
use crate::error::ParamError;

/// Binding between the two modulation frequencies and the two phases.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pairing {
    /// `cos(w3 t + phi2) cos(w2 t + phi3)`; reproduces the reference
    /// research code exactly.
    #[default]
    Crossed,
    /// `cos(w2 t + phi2) cos(w3 t + phi3)`, as written in the model's
    /// defining formula.
    Direct,
}

/// Drive parameters.
///
/// `phi2` and `phi3` are redrawn for every realization in an ensemble; all
/// other fields are fixed for the lifetime of an engine.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Drive {
    /// Bare kicking strength.
    pub k0: f64,
    /// Effective Planck constant.
    pub hbar: f64,
    /// Modulation depth.
    pub eps: f64,
    /// First modulation frequency.
    pub w2: f64,
    /// Second modulation frequency.
    pub w3: f64,
    /// First phase offset.
    #[serde(default)]
    pub phi2: f64,
    /// Second phase offset.
    #[serde(default)]
    pub phi3: f64,
    /// Frequency/phase binding.
    #[serde(default)]
    pub pairing: Pairing,
}

impl Drive {
    /// Create a new `Drive` with [`Pairing::Crossed`].
    pub fn new(
        k0: f64,
        hbar: f64,
        eps: f64,
        w2: f64,
        w3: f64,
        phi2: f64,
        phi3: f64,
    ) -> Result<Self, ParamError>
    {
        let drive = Self {
            k0, hbar, eps, w2, w3, phi2, phi3,
            pairing: Pairing::default(),
        };
        drive.check()?;
        Ok(drive)
    }

    /// Create an unmodulated drive with constant strength `k0 / hbar`.
    pub fn constant(k0: f64, hbar: f64) -> Result<Self, ParamError> {
        Self::new(k0, hbar, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Return a copy of `self` with a different frequency/phase binding.
    pub fn with_pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    /// Return a copy of `self` with new phase offsets.
    pub fn with_phases(mut self, phi2: f64, phi3: f64) -> Self {
        self.phi2 = phi2;
        self.phi3 = phi3;
        self
    }

    /// Check that the kicking strength is non-negative and the effective
    /// Planck constant is positive.
    pub fn check(&self) -> Result<(), ParamError> {
        ParamError::check_kick(self.k0)?;
        ParamError::check_hbar(self.hbar)?;
        Ok(())
    }

    /// Instantaneous (ħ-rescaled) kicking strength at kick number `t`.
    pub fn strength_at(&self, t: usize) -> f64 {
        let t = t as f64;
        let (wa, wb)
            = match self.pairing {
                Pairing::Crossed => (self.w3, self.w2),
                Pairing::Direct => (self.w2, self.w3),
            };
        self.k0
            * (
                1.0 + self.eps
                * (wa * t + self.phi2).cos()
                * (wb * t + self.phi3).cos()
            )
            / self.hbar
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn unmodulated_is_constant() {
        let drive = Drive::new(2.5, 0.5, 0.0, 1.1, 2.3, 0.4, 0.9).unwrap();
        assert!((0..50).all(|t| (drive.strength_at(t) - 5.0).abs() < 1e-12));

        // zero frequencies freeze the modulation at its t = 0 value
        let drive = Drive::new(1.0, 1.0, 0.5, 0.0, 0.0, 0.3, 0.7).unwrap();
        let k = 1.0 + 0.5 * 0.3_f64.cos() * 0.7_f64.cos();
        assert!((0..50).all(|t| (drive.strength_at(t) - k).abs() < 1e-12));
    }

    #[test]
    fn periodic_for_rational_frequencies() {
        // periods 4 and 6 => joint period 12
        let drive
            = Drive::new(1.7, 2.0, 0.8, PI / 2.0, PI / 3.0, 0.25, 0.6)
            .unwrap();
        for t in 0..24 {
            let diff = drive.strength_at(t) - drive.strength_at(t + 12);
            assert!(diff.abs() < 1e-9);
        }
        assert!((drive.strength_at(0) - drive.strength_at(1)).abs() > 1e-6);
    }

    #[test]
    fn pairing() {
        let crossed = Drive::new(1.0, 1.0, 1.0, 0.3, 1.9, 0.2, 1.4).unwrap();
        let direct = crossed.with_pairing(Pairing::Direct);
        let t = 3;
        let kc = 1.0 + (1.9 * 3.0 + 0.2_f64).cos() * (0.3 * 3.0 + 1.4_f64).cos();
        let kd = 1.0 + (0.3 * 3.0 + 0.2_f64).cos() * (1.9 * 3.0 + 1.4_f64).cos();
        assert!((crossed.strength_at(t) - kc).abs() < 1e-12);
        assert!((direct.strength_at(t) - kd).abs() < 1e-12);
    }

    #[test]
    fn bad_params() {
        assert!(matches!(
            Drive::constant(-1.0, 1.0),
            Err(ParamError::KickStrength(_)),
        ));
        assert!(matches!(Drive::constant(1.0, 0.0), Err(ParamError::Hbar(_))));
    }
}
