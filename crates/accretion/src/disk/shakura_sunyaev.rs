//! Standard thin disk for sub-Eddington accretion.
//!
//! The same mass flux passes through every radius, so the angular momentum
//! flux has the closed form J(R) = Ṁ √(GM) (√R - √R_in).

use super::disk_model::DiskModel;
use super::params::DiskParams;
use super::structure::{radial_grid, solve, AccretionLaw, RadialProfile};
use crate::compact_object::CompactObject;
use crate::constants::G;
use crate::error::{AccretionError, Result};
use crate::regime::Regime;

/// A Shakura-Sunyaev disk, valid for ṁ < 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ShakuraSunyaevDisk {
    compact_object: CompactObject,
    params: DiskParams,
    profile: RadialProfile,
}

impl ShakuraSunyaevDisk {
    /// Solve a thin disk around `compact_object`.
    ///
    /// # Errors
    /// `InvalidParameter` if the parameters are invalid or ṁ ≥ 1;
    /// `ReconstructionFailure` if the solution is not physical.
    pub fn new(compact_object: CompactObject, params: DiskParams) -> Result<Self> {
        params.validate()?;
        require_sub_eddington(params.mdot)?;

        let radii = radial_grid(&compact_object, &params);
        let profile = solve(
            &compact_object,
            &params,
            &radii,
            &ConstantAccretion::new(&compact_object, params.mdot),
        )?;

        Ok(Self {
            compact_object,
            params,
            profile,
        })
    }

    /// Re-solve on the existing grid with a new ṁ.
    ///
    /// The disk is unchanged if this fails.
    pub fn set_mdot(&mut self, mdot: f64) -> Result<()> {
        let params = DiskParams { mdot, ..self.params };
        params.validate()?;
        require_sub_eddington(mdot)?;

        let profile = solve(
            &self.compact_object,
            &params,
            &self.profile.radii,
            &ConstantAccretion::new(&self.compact_object, mdot),
        )?;

        self.params = params;
        self.profile = profile;
        Ok(())
    }
}

impl DiskModel for ShakuraSunyaevDisk {
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
        Regime::SubEddington
    }
}

fn require_sub_eddington(mdot: f64) -> Result<()> {
    if Regime::for_mdot(mdot) == Regime::SubEddington {
        Ok(())
    } else {
        Err(AccretionError::invalid(
            "mdot",
            format!("thin disk needs mdot < 1, got {mdot}"),
        ))
    }
}

struct ConstantAccretion {
    rate: f64,
    sqrt_gm: f64,
    sqrt_r_in: f64,
}

impl ConstantAccretion {
    fn new(compact_object: &CompactObject, mdot: f64) -> Self {
        Self {
            rate: mdot * compact_object.eddington_accretion_rate().to_grams_per_sec(),
            sqrt_gm: (G * compact_object.mass().to_grams()).sqrt(),
            sqrt_r_in: compact_object.isco_radius().to_cm().sqrt(),
        }
    }
}

impl AccretionLaw for ConstantAccretion {
    fn local_rate(&self, _r: f64) -> f64 {
        self.rate
    }

    fn angular_momentum_flux(&self, r: f64) -> f64 {
        self.rate * self.sqrt_gm * (r.sqrt() - self.sqrt_r_in)
    }
}
