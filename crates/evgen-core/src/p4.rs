//! Four-momentum value type used across the interaction model.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A relativistic four-momentum `(px, py, pz, E)` in GeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FourMomentum {
    /// Momentum x-component.
    pub px: f64,
    /// Momentum y-component.
    pub py: f64,
    /// Momentum z-component.
    pub pz: f64,
    /// Energy component.
    pub e: f64,
}

impl FourMomentum {
    /// Creates a four-momentum from its components.
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Returns the null four-momentum.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the at-rest, on-shell four-momentum of a particle with the
    /// given mass.
    pub fn at_rest(mass: f64) -> Self {
        Self {
            px: 0.0,
            py: 0.0,
            pz: 0.0,
            e: mass,
        }
    }

    /// Returns the energy component.
    pub fn energy(&self) -> f64 {
        self.e
    }

    /// Returns the magnitude of the three-momentum.
    pub fn momentum(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Returns the squared invariant mass `E^2 - |p|^2`.
    pub fn mass2(&self) -> f64 {
        self.e * self.e - (self.px * self.px + self.py * self.py + self.pz * self.pz)
    }

    /// Returns the invariant mass, clamping small negative `mass2` values
    /// arising from rounding to zero.
    pub fn mass(&self) -> f64 {
        self.mass2().max(0.0).sqrt()
    }
}

impl Display for FourMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(E = {:.6}, px = {:.6}, py = {:.6}, pz = {:.6})",
            self.e, self.px, self.py, self.pz
        )
    }
}
