//! The central black hole or neutron star.

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Mass, MassRate};

use crate::constants::{C, G, KAPPA_ES, PI};
use crate::error::{AccretionError, Result};

/// A compact object described by its mass and dimensionless spin.
///
/// Everything else (gravitational radius, ISCO, Eddington luminosity and
/// accretion rate) is derived on demand, so a changed mass or spin can never
/// leave a stale derived value behind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompactObject {
    mass: Mass,
    spin: f64,
}

impl CompactObject {
    /// Create a compact object.
    ///
    /// # Errors
    /// `InvalidParameter` when the mass is not positive and finite, or the
    /// spin lies outside [-1, 1].
    pub fn new(mass: Mass, spin: f64) -> Result<Self> {
        validate_mass(mass)?;
        validate_spin(spin)?;
        Ok(Self { mass, spin })
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    /// Replace the mass. Nothing is written if validation fails.
    pub fn set_mass(&mut self, mass: Mass) -> Result<()> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Replace the spin. Nothing is written if validation fails.
    pub fn set_spin(&mut self, spin: f64) -> Result<()> {
        validate_spin(spin)?;
        self.spin = spin;
        Ok(())
    }

    /// R_g = GM/c²
    pub fn gravitational_radius(&self) -> Length {
        Length::from_cm(G * self.mass.to_grams() / (C * C))
    }

    /// Radius of the innermost stable circular orbit.
    ///
    /// Bardeen, Press & Teukolsky (1972). Positive spin is prograde
    /// (6 R_g at a = 0, R_g at a = 1); negative spin is retrograde
    /// (9 R_g at a = -1).
    pub fn isco_radius(&self) -> Length {
        let a = self.spin;
        let z1 = 1.0 + (1.0 - a * a).cbrt() * ((1.0 + a).cbrt() + (1.0 - a).cbrt());
        let z2 = (3.0 * a * a + z1 * z1).sqrt();
        let root = ((3.0 - z1) * (3.0 + z1 + 2.0 * z2)).max(0.0).sqrt();
        let r = if a >= 0.0 {
            3.0 + z2 - root
        } else {
            3.0 + z2 + root
        };
        self.gravitational_radius() * r
    }

    /// L_Edd = 4πGMc/κ_es
    pub fn eddington_luminosity(&self) -> Luminosity {
        Luminosity::from_erg_per_sec(4.0 * PI * G * self.mass.to_grams() * C / KAPPA_ES)
    }

    /// Newtonian efficiency of a disk truncated at the ISCO, η = R_g / (2 R_isco).
    pub fn accretion_efficiency(&self) -> f64 {
        self.gravitational_radius() / (self.isco_radius() * 2.0)
    }

    /// Accretion rate that releases L_Edd: Ṁ_Edd = L_Edd / (η c²).
    ///
    /// This is the `Mdot_0` against which local accretion rates are reported.
    pub fn eddington_accretion_rate(&self) -> MassRate {
        let l_edd = self.eddington_luminosity().to_erg_per_sec();
        MassRate::from_grams_per_sec(l_edd / (self.accretion_efficiency() * C * C))
    }
}

fn validate_mass(mass: Mass) -> Result<()> {
    if mass.is_physical() {
        Ok(())
    } else {
        Err(AccretionError::invalid(
            "mass",
            format!("must be positive and finite, got {} M☉", mass.to_solar_masses()),
        ))
    }
}

fn validate_spin(spin: f64) -> Result<()> {
    if spin.is_finite() && (-1.0..=1.0).contains(&spin) {
        Ok(())
    } else {
        Err(AccretionError::invalid(
            "spin",
            format!("must lie in [-1, 1], got {spin}"),
        ))
    }
}
