//! Shared output contract of every disk variant.
//!
//! | Category | Methods |
//! |----------|---------|
//! | **Required** | `compact_object`, `params`, `profile`, `regime` |
//! | **Override-able** | `spherization_radius` |
//! | **Derived** | boundary rate, luminosity, grid bounds |

use units::{Length, Luminosity, MassRate};

use super::params::DiskParams;
use super::structure::RadialProfile;
use crate::compact_object::CompactObject;
use crate::regime::Regime;

/// A solved accretion disk.
///
/// Implementors store the compact object and parameters they were built
/// from together with the radial profile. Everything reported to clients is
/// derived from those three.
pub trait DiskModel {
    // =========================================================================
    // Required methods
    // =========================================================================

    /// The compact object this disk was solved around.
    fn compact_object(&self) -> &CompactObject;

    /// The parameters this disk was solved with.
    fn params(&self) -> &DiskParams;

    /// Radial arrays on the disk's grid.
    fn profile(&self) -> &RadialProfile;

    /// Accretion regime of this solution.
    fn regime(&self) -> Regime;

    // =========================================================================
    // Override-able methods
    // =========================================================================

    /// Radius inside which the disk loses mass to a wind.
    ///
    /// Only super-Eddington solutions have one.
    fn spherization_radius(&self) -> Option<Length> {
        None
    }

    // =========================================================================
    // Derived methods
    // =========================================================================

    fn mdot(&self) -> f64 {
        self.params().mdot
    }

    fn alpha(&self) -> f64 {
        self.params().alpha
    }

    fn n_radii(&self) -> usize {
        self.profile().len()
    }

    /// Ṁ_0, the Eddington accretion rate of the compact object.
    fn eddington_accretion_rate(&self) -> MassRate {
        self.compact_object().eddington_accretion_rate()
    }

    /// Accretion rate fed in at the outer boundary, ṁ × Ṁ_0.
    fn boundary_accretion_rate(&self) -> MassRate {
        self.eddington_accretion_rate() * self.mdot()
    }

    /// Total luminosity radiated from both faces.
    fn luminosity(&self) -> Luminosity {
        self.profile().luminosity()
    }

    fn inner_radius(&self) -> Length {
        Length::from_cm(self.profile().radii[0])
    }

    fn outer_radius(&self) -> Length {
        Length::from_cm(self.profile().radii[self.n_radii() - 1])
    }
}
