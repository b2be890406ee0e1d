//! The single (compact object, disk) pair behind the service.

use tracing::{debug, info, warn};
use units::Mass;

use crate::compact_object::CompactObject;
use crate::disk::{AccretionDisk, DiskModel, DiskParams, DiskUpdate};
use crate::error::{AccretionError, Result};
use crate::regime::{plan, Plan};

/// Holds at most one disk, which owns the compact object it was built
/// around. A disk can therefore never refer to a stale compact object.
///
/// Every operation validates its input and solves any new disk before
/// touching the held state, so a failed call leaves the session as it was.
#[derive(Debug, Clone, Default)]
pub struct Session {
    disk: Option<AccretionDisk>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.disk.is_some()
    }

    pub fn disk(&self) -> Option<&AccretionDisk> {
        self.disk.as_ref()
    }

    pub fn compact_object(&self) -> Option<&CompactObject> {
        self.disk.as_ref().map(|disk| disk.compact_object())
    }

    /// The held disk, or `UninitializedState`.
    pub fn current(&self) -> Result<&AccretionDisk> {
        self.disk.as_ref().ok_or(AccretionError::UninitializedState)
    }

    /// Replace whatever is held with a new compact object and disk.
    pub fn initialize(&mut self, mass: Mass, spin: f64, params: DiskParams) -> Result<Plan> {
        let compact_object = CompactObject::new(mass, spin)?;
        params.validate()?;

        let plan = plan(None, &compact_object, &params);
        self.disk = Some(build(compact_object, params)?);

        info!(
            mass = mass.to_solar_masses(),
            spin,
            mdot = params.mdot,
            regime = %plan.regime,
            n_radii = params.n_radii,
            "initialized compact object"
        );
        Ok(plan)
    }

    /// Change the mass, optionally together with disk parameters.
    pub fn change_mass(&mut self, mass: Mass, update: DiskUpdate) -> Result<Plan> {
        let disk = self.current()?;
        let mut compact_object = *disk.compact_object();
        compact_object.set_mass(mass)?;
        let params = update.apply_to(*disk.params());

        self.apply(compact_object, params)
    }

    /// Change the spin, optionally together with disk parameters.
    pub fn change_spin(&mut self, spin: f64, update: DiskUpdate) -> Result<Plan> {
        let disk = self.current()?;
        let mut compact_object = *disk.compact_object();
        compact_object.set_spin(spin)?;
        let params = update.apply_to(*disk.params());

        self.apply(compact_object, params)
    }

    /// Change disk parameters around the current compact object.
    ///
    /// Only an ṁ change within the current regime avoids a rebuild.
    pub fn change_mdot_or_alpha(&mut self, update: DiskUpdate) -> Result<Plan> {
        let disk = self.current()?;
        let compact_object = *disk.compact_object();
        let params = update.apply_to(*disk.params());

        self.apply(compact_object, params)
    }

    fn apply(&mut self, compact_object: CompactObject, params: DiskParams) -> Result<Plan> {
        params.validate()?;

        let plan = plan(self.disk.as_ref(), &compact_object, &params);
        let disk = self.disk.as_mut().ok_or(AccretionError::UninitializedState)?;

        if plan.must_reconstruct {
            let previous = disk.regime();
            *disk = build(compact_object, params)?;
            info!(
                from = %previous,
                regime = %plan.regime,
                mass = compact_object.mass().to_solar_masses(),
                spin = compact_object.spin(),
                mdot = params.mdot,
                n_radii = params.n_radii,
                "reconstructed disk"
            );
        } else if disk.mdot() != params.mdot {
            disk.set_mdot(params.mdot).inspect_err(|e| {
                warn!(mdot = params.mdot, error = %e, "in-place mdot update failed");
            })?;
            debug!(regime = %plan.regime, mdot = params.mdot, "updated mdot in place");
        } else {
            debug!(regime = %plan.regime, "parameters unchanged");
        }

        Ok(plan)
    }
}

fn build(compact_object: CompactObject, params: DiskParams) -> Result<AccretionDisk> {
    AccretionDisk::build(compact_object, params).inspect_err(|e| {
        warn!(mdot = params.mdot, alpha = params.alpha, error = %e, "disk reconstruction failed");
    })
}
