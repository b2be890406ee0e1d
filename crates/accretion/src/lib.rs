//! Accreting compact objects and their disks.
//!
//! A [`Session`] holds one [`CompactObject`] and the [`AccretionDisk`] built
//! around it. Mutations go through the session, which asks the
//! [`regime`] policy whether the disk must be rebuilt or can be updated in
//! place, and [`response`] turns the result into the dimensionless profiles
//! served to clients.

pub mod compact_object;
pub mod constants;
pub mod disk;
pub mod error;
pub mod regime;
pub mod response;
pub mod session;

#[cfg(test)]
mod compact_object_test;
#[cfg(test)]
mod regime_test;
#[cfg(test)]
mod response_test;

pub use compact_object::CompactObject;
pub use disk::{AccretionDisk, DiskModel, DiskParams, DiskUpdate, RadialProfile};
pub use error::{AccretionError, Result};
pub use regime::{Plan, Regime};
pub use response::{CompactObjectResponse, DiskResponse, SpinResponse, StateResponse};
pub use session::Session;
