#![allow(dead_code)]

//! Provides constructs for the stroboscopic (kick-to-kick) simulation of the
//! quantum kicked rotor under a quasi-periodically modulated kicking strength,
//! via the pseudo-spectral split-step operator method.
//!
//! Provides implementations for the following:
//! - State evolution (Schrödinger picture):
//!     - Single Floquet periods and full runs recording the energy proxy ⟨p²⟩
//!     - Averaging of ⟨p²⟩ over random realizations of the drive phases, run
//!       in parallel
//! - Operator evolution (Heisenberg picture):
//!     - Position and momentum operator diagonals conjugated by the split
//!       Floquet operator
//!     - Coefficient/Gram matrices and their traces, used as an OTOC proxy
//!
//! ```
//! use qpkr::{ drive::Drive, evolve::Rotor };
//!
//! let drive = Drive::new(1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
//! let rotor = Rotor::new(8, 5, drive).unwrap();
//! let (p2, psi) = rotor.evolve().unwrap();
//! assert_eq!(p2.len(), 5);
//! assert_eq!(psi.len(), 8);
//! assert!(p2.iter().all(|v| v.is_finite() && *v <= 16.0));
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod utils;
pub mod transform;
pub mod grid;
pub mod drive;
pub mod propagator;
pub mod evolve;
pub mod ensemble;
pub mod otoc;
pub mod config;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
