use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Speed of light in vacuum (cm/s)
pub const SPEED_OF_LIGHT_CM_S: f64 = 2.99792458e10;

/// A velocity using f64 precision, base unit cm/s.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: cm/s

impl Velocity {
    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1e5)
    }

    /// Creates a velocity from a fraction of the speed of light (β = v/c).
    pub fn from_fraction_of_light(beta: f64) -> Self {
        Self(beta * SPEED_OF_LIGHT_CM_S)
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1e5
    }

    /// β = v/c
    pub fn to_fraction_of_light(&self) -> f64 {
        self.0 / SPEED_OF_LIGHT_CM_S
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
