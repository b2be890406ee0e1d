use serde::{Deserialize, Serialize};

use crate::error::{require_positive, AccretionError, Result};

/// Inner stress W_rφ(R_isco) in CGS. Negligible against the viscous stress,
/// so it stands for "no imposed torque" while keeping the inner edge physical.
pub const DEFAULT_INNER_TORQUE: f64 = -1e10;

/// Radial grid points used when a caller does not ask for a resolution.
pub const DEFAULT_N_RADII: usize = 10_000;

/// Largest radial grid accepted from a caller.
pub const MAX_N_RADII: usize = 300_000;

/// Outer disk edge in units of R_isco.
pub const DEFAULT_OUTER_RADIUS: f64 = 1e5;

/// Everything a disk needs besides its compact object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskParams {
    /// Accretion rate at the outer boundary, in Eddington units
    pub mdot: f64,

    /// Shakura-Sunyaev viscosity parameter
    pub alpha: f64,

    /// Vertically integrated stress at the inner edge (CGS)
    pub inner_torque: f64,

    /// Number of radial grid points
    #[serde(rename = "N")]
    pub n_radii: usize,

    /// Outer edge in units of R_isco
    pub outer_radius: f64,
}

impl DiskParams {
    pub fn new(mdot: f64, alpha: f64) -> Self {
        Self {
            mdot,
            alpha,
            inner_torque: DEFAULT_INNER_TORQUE,
            n_radii: DEFAULT_N_RADII,
            outer_radius: DEFAULT_OUTER_RADIUS,
        }
    }

    pub fn with_inner_torque(mut self, inner_torque: f64) -> Self {
        self.inner_torque = inner_torque;
        self
    }

    pub fn with_n_radii(mut self, n_radii: usize) -> Self {
        self.n_radii = n_radii;
        self
    }

    pub fn with_outer_radius(mut self, outer_radius: f64) -> Self {
        self.outer_radius = outer_radius;
        self
    }

    /// Check every field before any disk is built from these parameters.
    pub fn validate(&self) -> Result<()> {
        require_positive("mdot", self.mdot)?;
        require_positive("alpha", self.alpha)?;
        if !self.inner_torque.is_finite() {
            return Err(AccretionError::invalid(
                "innerTorque",
                format!("must be finite, got {}", self.inner_torque),
            ));
        }
        if !(2..=MAX_N_RADII).contains(&self.n_radii) {
            return Err(AccretionError::invalid(
                "N",
                format!(
                    "need between 2 and {MAX_N_RADII} grid points, got {}",
                    self.n_radii
                ),
            ));
        }
        if !(self.outer_radius.is_finite() && self.outer_radius > 1.0) {
            return Err(AccretionError::invalid(
                "outerRadius",
                format!("must exceed 1 R_isco, got {}", self.outer_radius),
            ));
        }
        Ok(())
    }
}

/// A partial change to [`DiskParams`]; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskUpdate {
    pub mdot: Option<f64>,
    pub alpha: Option<f64>,
    pub inner_torque: Option<f64>,
    #[serde(rename = "N")]
    pub n_radii: Option<usize>,
}

impl DiskUpdate {
    pub fn mdot(mdot: f64) -> Self {
        Self {
            mdot: Some(mdot),
            ..Self::default()
        }
    }

    pub fn alpha(alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..Self::default()
        }
    }

    /// Merge onto `base`.
    pub fn apply_to(&self, base: DiskParams) -> DiskParams {
        DiskParams {
            mdot: self.mdot.unwrap_or(base.mdot),
            alpha: self.alpha.unwrap_or(base.alpha),
            inner_torque: self.inner_torque.unwrap_or(base.inner_torque),
            n_radii: self.n_radii.unwrap_or(base.n_radii),
            outer_radius: base.outer_radius,
        }
    }
}
