//! Physical constants in CGS units.

use units::SPEED_OF_LIGHT_CM_S;

/// Gravitational constant (cm³/(g·s²))
pub const G: f64 = 6.674e-8;

/// Speed of light (cm/s)
pub const C: f64 = SPEED_OF_LIGHT_CM_S;

/// Thomson cross section (cm²)
pub const SIGMA_T: f64 = 6.65245854533e-25;

/// Proton mass (g)
pub const M_PROTON: f64 = 1.67262192e-24;

/// Electron scattering opacity for ionized hydrogen (cm²/g)
pub const KAPPA_ES: f64 = SIGMA_T / M_PROTON;

/// Radiation density constant (erg/(cm³·K⁴))
pub const A_RAD: f64 = 7.5657e-15;

/// Pi
pub const PI: f64 = std::f64::consts::PI;
