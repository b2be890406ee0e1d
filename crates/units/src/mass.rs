use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in grams (1.98847 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit, which is how compact object masses are
/// quoted (a 10 M☉ black hole, a 1.4 M☉ neutron star). Disk physics runs in
/// CGS, so `to_grams` is the usual exit.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let black_hole = Mass::from_solar_masses(10.0);
/// let grams = black_hole.to_grams();
/// assert!(grams > 1e34);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    /// True for a strictly positive, finite mass.
    pub fn is_physical(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
