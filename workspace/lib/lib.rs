//! Companion demonstrations that sit beside the kicked-rotor engine without
//! feeding into it.

pub mod classical;
pub mod oscillator;
