use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul};

/// Nominal solar luminosity in erg/s (IAU 2015 B3)
pub const SOLAR_LUMINOSITY_ERG_S: f64 = 3.828e33;

/// A radiated power using f64 precision.
///
/// The base unit is erg/s. Eddington luminosities of stellar-mass black holes
/// sit around 10³⁹ erg/s and are reported in these units directly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: erg/s

impl Luminosity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_erg_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_solar_luminosities(value: f64) -> Self {
        Self(value * SOLAR_LUMINOSITY_ERG_S)
    }

    pub fn to_erg_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_solar_luminosities(&self) -> f64 {
        self.0 / SOLAR_LUMINOSITY_ERG_S
    }
}

impl Add for Luminosity {
    type Output = Luminosity;

    fn add(self, rhs: Luminosity) -> Luminosity {
        Luminosity(self.0 + rhs.0)
    }
}

impl Mul<f64> for Luminosity {
    type Output = Luminosity;

    fn mul(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 * rhs)
    }
}

impl Div<f64> for Luminosity {
    type Output = Luminosity;

    fn div(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 / rhs)
    }
}

/// Ratio of two luminosities, e.g. L / L_Edd
impl Div for Luminosity {
    type Output = f64;

    fn div(self, rhs: Luminosity) -> f64 {
        self.0 / rhs.0
    }
}
