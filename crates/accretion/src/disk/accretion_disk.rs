use units::Length;

use super::disk_model::DiskModel;
use super::params::DiskParams;
use super::shakura_sunyaev::ShakuraSunyaevDisk;
use super::structure::RadialProfile;
use super::super_eddington::SuperEddingtonDisk;
use crate::compact_object::CompactObject;
use crate::error::{AccretionError, Result};
use crate::regime::Regime;

/// The disk held by a session: one of the two solutions, chosen by ṁ.
#[derive(Debug, Clone, PartialEq)]
pub enum AccretionDisk {
    SubEddington(ShakuraSunyaevDisk),
    SuperEddington(SuperEddingtonDisk),
}

impl AccretionDisk {
    /// Build whichever variant `params.mdot` calls for.
    pub fn build(compact_object: CompactObject, params: DiskParams) -> Result<Self> {
        match Regime::for_mdot(params.mdot) {
            Regime::SubEddington => {
                ShakuraSunyaevDisk::new(compact_object, params).map(Self::SubEddington)
            }
            Regime::SuperEddington => {
                SuperEddingtonDisk::new(compact_object, params).map(Self::SuperEddington)
            }
        }
    }

    /// Update ṁ on the existing grid.
    ///
    /// # Errors
    /// `InvalidParameter` if `mdot` belongs to the other regime; a new disk
    /// has to be built for that.
    pub fn set_mdot(&mut self, mdot: f64) -> Result<()> {
        let target = Regime::for_mdot(mdot);
        if target != self.regime() {
            return Err(AccretionError::invalid(
                "mdot",
                format!("{mdot} moves the disk to {target}, which needs a rebuild"),
            ));
        }

        match self {
            Self::SubEddington(disk) => disk.set_mdot(mdot),
            Self::SuperEddington(disk) => disk.set_mdot(mdot),
        }
    }

    fn model(&self) -> &dyn DiskModel {
        match self {
            Self::SubEddington(disk) => disk,
            Self::SuperEddington(disk) => disk,
        }
    }
}

impl DiskModel for AccretionDisk {
    fn compact_object(&self) -> &CompactObject {
        self.model().compact_object()
    }

    fn params(&self) -> &DiskParams {
        self.model().params()
    }

    fn profile(&self) -> &RadialProfile {
        self.model().profile()
    }

    fn regime(&self) -> Regime {
        self.model().regime()
    }

    fn spherization_radius(&self) -> Option<Length> {
        self.model().spherization_radius()
    }
}
