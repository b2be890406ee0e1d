//! Accretion disk models around a compact object.
//!
//! Two structural solutions share one output contract ([`DiskModel`]):
//!
//! | Variant | Regime | Zones |
//! |---------|--------|-------|
//! | [`ShakuraSunyaevDisk`] | ṁ < 1 | single thin disk |
//! | [`SuperEddingtonDisk`] | ṁ ≥ 1 | wind-fed inner zone inside R_sph, thin outer zone |
//!
//! [`AccretionDisk`] is the closed union the session stores; it is the only
//! place a variant is chosen.

mod accretion_disk;
mod disk_model;
mod params;
mod shakura_sunyaev;
pub(crate) mod structure;
mod super_eddington;

#[cfg(test)]
mod accretion_disk_test;

pub use accretion_disk::AccretionDisk;
pub use disk_model::DiskModel;
pub use params::{
    DiskParams, DiskUpdate, DEFAULT_INNER_TORQUE, DEFAULT_N_RADII, DEFAULT_OUTER_RADIUS,
    MAX_N_RADII,
};
pub use shakura_sunyaev::ShakuraSunyaevDisk;
pub use structure::RadialProfile;
pub use super_eddington::{SuperEddingtonDisk, SPHERIZATION_COEFFICIENT};
