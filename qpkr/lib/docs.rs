//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Basis conventions](#basis-conventions)
//! - [Split-step Floquet operator](#split-step-floquet-operator)
//! - [Quasi-periodic drive](#quasi-periodic-drive)
//! - [Operator evolution](#operator-evolution)
//!
//! # Background
//! The kicked rotor is a particle confined to a ring, struck periodically by a
//! potential that depends only on its angle. In dimensionless units,
//! ```text
//!      p²
//! H = --- + K(t) cos(x) Σ δ(t - n)
//!      2               n
//! ```
//! with angle *x* ∊ [0, 2π) and (integer, in units of *ħ*) angular momentum
//! *p*. Between kicks the rotor moves freely; at each kick it picks up a phase
//! depending on *x* alone. The time-evolution operator over a single period
//! (the Floquet operator) is therefore exactly the product of two
//! exponentials,
//! ```text
//! U = exp(-i K cos(x)) exp(-i ħ p² / 2)
//! ```
//! and no time-stepping error is incurred at all: the only approximation is
//! the truncation of the angular momentum to *N* states.
//!
//! For constant *K* the classical motion diffuses in momentum while the
//! quantum motion localizes dynamically, mirroring Anderson localization in a
//! one-dimensional disordered lattice. Modulating *K* with two additional
//! incommensurate frequencies maps the problem onto a three-dimensional
//! Anderson model[^1][^2], in which a metal-insulator transition appears as a
//! change in the long-time growth of ⟨p²⟩: linear (diffusive) on one side,
//! saturating (localized) on the other, and ∝ *t*^(2/3) at criticality.
//!
//! # Basis conventions
//! The *N* momentum states are stored in FFT order,
//! ```text
//! p = {0, 1, ..., N/2 - 1, -N/2, ..., -1}
//! ```
//! and the position grid is
//! ```text
//! x[j] = 2π j / N, j ∊ {0, ..., N - 1}
//! ```
//! The change from the momentum to the position representation is the inverse
//! discrete Fourier transform (with the factor 1/*N*) and the change back is
//! the unnormalized forward transform, so that a momentum-space state with
//! unit norm keeps unit norm after a round trip.
//!
//! # Split-step Floquet operator
//! Acting on a momentum-representation state *ψ*, one period is
//! ```text
//! ψ' = FFT[ exp(-i K cos(x)) IFFT[ exp(-i ħ p² / 2) ψ ] ]
//! ```
//! Both multipliers are diagonal in their respective representations and have
//! unit modulus, so each period is unitary up to floating-point error. States
//! are not renormalized between periods.
//!
//! The energy proxy recorded after each period is
//! ```text
//! ⟨p²⟩ = Σ p² |ψ'(p)|²
//!        p
//! ```
//!
//! # Quasi-periodic drive
//! The kicking strength at kick *t* is
//! ```text
//!        K0
//! K(t) = -- (1 + ε cos(ω₂ t + φ₂) cos(ω₃ t + φ₃))
//!        ħ
//! ```
//! For the Anderson mapping to hold, *ω₂*, *ω₃*, *π* and *ħ* should be
//! incommensurate. Different realizations of the phases *φ₂*, *φ₃* play the
//! role of different disorder realizations, and ⟨p²⟩ is averaged over them.
//! See [`Pairing`][crate::drive::Pairing] for the binding between frequencies
//! and phases.
//!
//! # Operator evolution
//! In the Heisenberg picture the state is fixed and the operators evolve as
//! *O* → *U*† *O* *U*. Here the position and momentum operators are each kept
//! as a diagonal in their natural basis, and their conjugation is carried out
//! elementwise with the same split multipliers (see [`otoc`][crate::otoc]).
//! From the momentum diagonal at each step one forms
//! ```text
//! b[r, s] = i (r - s) p[s]
//! c = b b†
//! ```
//! whose trace serves as a proxy for the growth of the microcanonical
//! out-of-time-order correlator[^3].
//!
//! [^1]: G. Casati, I. Guarneri, and D. L. Shepelyansky, "Anderson Transition
//! in a One-Dimensional System with Three Incommensurate Frequencies." Phys.
//! Rev. Lett. **62**, 345 (1989).
//!
//! [^2]: G. Lemarié, J. Chabé, P. Szriftgiser, J. C. Garreau, B. Grémaud, and
//! D. Delande, "Observation of the Anderson metal-insulator transition with
//! atomic matter waves: Theory and experiment." Phys. Rev. A **80**, 043626
//! (2009). [arXiv:0904.2324](https://arxiv.org/abs/0904.2324)
//!
//! [^3]: K. Hashimoto, K. Murata, and R. Yoshii, "Out-of-time-order
//! correlators in quantum mechanics." J. High Energ. Phys. **2017**, 138
//! (2017).
