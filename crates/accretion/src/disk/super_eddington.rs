//! Composite disk for super-Eddington accretion.
//!
//! Outside the spherization radius the disk is a standard thin disk fed at
//! the full rate Ṁ_0. Inside it, radiation pressure launches a wind and the
//! accretion rate falls linearly with radius, Ṁ(R) = Ṁ_0 R / R_sph, while
//! photons trapped in the inflow are advected instead of radiated.
//!
//! # References
//! - Shakura & Sunyaev (1973), section 4
//! - Poutanen, Lipunova, Fabrika, Butkevich & Abolmasov (2007) -
//!   "Supercritically accreting stellar mass black holes as ultraluminous
//!   X-ray sources"

use units::Length;

use super::disk_model::DiskModel;
use super::params::DiskParams;
use super::structure::{radial_grid, solve, AccretionLaw, RadialProfile};
use crate::compact_object::CompactObject;
use crate::constants::G;
use crate::error::{AccretionError, Result};
use crate::regime::Regime;

/// R_sph = (5/3) ṁ R_isco
pub const SPHERIZATION_COEFFICIENT: f64 = 5.0 / 3.0;

/// A two-zone disk with mass loss inside R_sph, valid for ṁ ≥ 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperEddingtonDisk {
    compact_object: CompactObject,
    params: DiskParams,
    spherization_radius: Length,
    profile: RadialProfile,
}

impl SuperEddingtonDisk {
    /// Solve a composite disk around `compact_object`.
    ///
    /// # Errors
    /// `InvalidParameter` if the parameters are invalid or ṁ < 1;
    /// `ReconstructionFailure` if the solution is not physical.
    pub fn new(compact_object: CompactObject, params: DiskParams) -> Result<Self> {
        params.validate()?;
        require_super_eddington(params.mdot)?;

        let radii = radial_grid(&compact_object, &params);
        let law = OutflowAccretion::new(&compact_object, params.mdot);
        let profile = solve(&compact_object, &params, &radii, &law)?;

        Ok(Self {
            compact_object,
            params,
            spherization_radius: Length::from_cm(law.r_sph),
            profile,
        })
    }

    /// Re-solve on the existing grid with a new ṁ.
    ///
    /// R_sph moves with ṁ. The disk is unchanged if this fails.
    pub fn set_mdot(&mut self, mdot: f64) -> Result<()> {
        let params = DiskParams { mdot, ..self.params };
        params.validate()?;
        require_super_eddington(mdot)?;

        let law = OutflowAccretion::new(&self.compact_object, mdot);
        let profile = solve(&self.compact_object, &params, &self.profile.radii, &law)?;

        self.params = params;
        self.spherization_radius = Length::from_cm(law.r_sph);
        self.profile = profile;
        Ok(())
    }
}

impl DiskModel for SuperEddingtonDisk {
    fn compact_object(&self) -> &CompactObject {
        &self.compact_object
    }

    fn params(&self) -> &DiskParams {
        &self.params
    }

    fn profile(&self) -> &RadialProfile {
        &self.profile
    }

    fn regime(&self) -> Regime {
        Regime::SuperEddington
    }

    fn spherization_radius(&self) -> Option<Length> {
        Some(self.spherization_radius)
    }
}

fn require_super_eddington(mdot: f64) -> Result<()> {
    if Regime::for_mdot(mdot) == Regime::SuperEddington {
        Ok(())
    } else {
        Err(AccretionError::invalid(
            "mdot",
            format!("composite disk needs mdot >= 1, got {mdot}"),
        ))
    }
}

struct OutflowAccretion {
    rate: f64,
    sqrt_gm: f64,
    r_in: f64,
    r_sph: f64,
}

impl OutflowAccretion {
    fn new(compact_object: &CompactObject, mdot: f64) -> Self {
        let r_in = compact_object.isco_radius().to_cm();
        Self {
            rate: mdot * compact_object.eddington_accretion_rate().to_grams_per_sec(),
            sqrt_gm: (G * compact_object.mass().to_grams()).sqrt(),
            r_in,
            r_sph: SPHERIZATION_COEFFICIENT * mdot * r_in,
        }
    }

    /// J for the wind zone, where Ṁ ∝ R.
    fn inner_flux(&self, r: f64) -> f64 {
        self.rate * self.sqrt_gm * (r.powf(1.5) - self.r_in.powf(1.5)) / (3.0 * self.r_sph)
    }
}

impl AccretionLaw for OutflowAccretion {
    fn local_rate(&self, r: f64) -> f64 {
        self.rate * (r / self.r_sph).min(1.0)
    }

    fn angular_momentum_flux(&self, r: f64) -> f64 {
        if r <= self.r_sph {
            self.inner_flux(r)
        } else {
            self.inner_flux(self.r_sph) + self.rate * self.sqrt_gm * (r.sqrt() - self.r_sph.sqrt())
        }
    }

    fn traps_photons(&self) -> bool {
        true
    }
}
