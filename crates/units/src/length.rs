use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const KM_TO_CM: f64 = 1e5;

/// A physical length quantity using f64 precision.
///
/// Centimetres are the base unit. Radii around a compact object range from
/// tens of kilometres (the ISCO of a stellar-mass black hole) to ~10¹¹ cm at
/// the outer disk edge, all comfortably represented in CGS.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let isco = Length::from_km(88.6);
/// assert!((isco.to_cm() - 8.86e6).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: cm

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_cm(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_CM)
    }

    pub fn to_cm(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_CM
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
