use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::mass::SOLAR_MASS_G;

/// Julian year in seconds
const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// A mass flow rate using f64 precision.
///
/// The base unit is g/s, the unit in which accretion rates enter the disk
/// equations. Solar masses per year is provided for reporting.
///
/// # Examples
///
/// ```rust
/// use units::MassRate;
///
/// let rate = MassRate::from_solar_masses_per_year(1e-8);
/// assert!(rate.to_grams_per_sec() > 6e17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: g/s

impl MassRate {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_grams_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MassRate` from solar masses per year.
    pub fn from_solar_masses_per_year(value: f64) -> Self {
        Self(value * SOLAR_MASS_G / SECONDS_PER_YEAR)
    }

    pub fn to_grams_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_solar_masses_per_year(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR / SOLAR_MASS_G
    }
}

impl Add for MassRate {
    type Output = MassRate;

    fn add(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 + rhs.0)
    }
}

impl Sub for MassRate {
    type Output = MassRate;

    fn sub(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 - rhs.0)
    }
}

impl Mul<f64> for MassRate {
    type Output = MassRate;

    fn mul(self, rhs: f64) -> MassRate {
        MassRate(self.0 * rhs)
    }
}

impl Div<f64> for MassRate {
    type Output = MassRate;

    fn div(self, rhs: f64) -> MassRate {
        MassRate(self.0 / rhs)
    }
}

/// Dimensionless accretion rate, e.g. Mdot / Mdot_Edd
impl Div for MassRate {
    type Output = f64;

    fn div(self, rhs: MassRate) -> f64 {
        self.0 / rhs.0
    }
}
