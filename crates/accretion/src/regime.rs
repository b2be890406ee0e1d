//! Regime selection and the rebuild-or-update decision.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compact_object::CompactObject;
use crate::disk::{AccretionDisk, DiskModel, DiskParams};

/// ṁ at and above which the disk is super-Eddington.
pub const EDDINGTON_THRESHOLD: f64 = 1.0;

/// Which disk solution applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    SubEddington,
    SuperEddington,
}

impl Regime {
    /// ṁ < 1 is sub-Eddington; everything else, including exactly 1, is not.
    pub fn for_mdot(mdot: f64) -> Self {
        if mdot < EDDINGTON_THRESHOLD {
            Self::SubEddington
        } else {
            Self::SuperEddington
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubEddington => "SubEddington",
            Self::SuperEddington => "SuperEddington",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`plan`]: the regime to use, whether a new disk is needed and
/// the grid resolution it is solved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub regime: Regime,
    pub must_reconstruct: bool,
    pub n_radii: usize,
}

/// Everything a disk's radial grid and stress profile depend on besides ṁ.
#[derive(Debug, PartialEq)]
struct StructuralParams {
    mass: f64,
    spin: f64,
    alpha: f64,
    inner_torque: f64,
    n_radii: usize,
    outer_radius: f64,
}

impl StructuralParams {
    fn of(compact_object: &CompactObject, params: &DiskParams) -> Self {
        Self {
            mass: compact_object.mass().to_solar_masses(),
            spin: compact_object.spin(),
            alpha: params.alpha,
            inner_torque: params.inner_torque,
            n_radii: params.n_radii,
            outer_radius: params.outer_radius,
        }
    }
}

/// Decide how to reach `requested` around `compact_object` from `current`.
///
/// A rebuild is needed when there is no disk yet, when the regime changes,
/// or when anything other than ṁ differs from what the current disk was
/// built with. A change of ṁ alone is applied in place.
pub fn plan(
    current: Option<&AccretionDisk>,
    compact_object: &CompactObject,
    requested: &DiskParams,
) -> Plan {
    let regime = Regime::for_mdot(requested.mdot);

    let must_reconstruct = match current {
        None => true,
        Some(disk) => {
            disk.regime() != regime
                || StructuralParams::of(disk.compact_object(), disk.params())
                    != StructuralParams::of(compact_object, requested)
        }
    };

    Plan {
        regime,
        must_reconstruct,
        n_radii: requested.n_radii,
    }
}
