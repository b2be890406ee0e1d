//! Dimensionless profiles served to clients.
//!
//! | Key | Value |
//! |-----|-------|
//! | `R` | R / R_isco |
//! | `H` | H / R |
//! | `Mdot` | ṁ · Ṁ(R) / Ṁ_0, never above ṁ |
//! | `T` | T / 10⁸ K |
//! | `rho` | ρ in g/cm³ |
//! | `vr` | v_r / c |
//! | `Qrad`, `Qadv` | fraction of Q_vis |
//! | `Ltot` | L / L_Edd |
//! | `Rsph` | R_sph / R_isco, 0 below Eddington |
//!
//! Ṁ_0 is the boundary rate ṁ Ṁ_Edd, so `Mdot` is in Eddington units.
//! R_isco and L_Edd are always taken from the disk's own compact object at
//! the moment the response is built.

use serde::{Deserialize, Serialize};
use units::Velocity;

use crate::disk::{DiskModel, DiskParams};
use crate::regime::{Plan, Regime};

const TEMPERATURE_SCALE: f64 = 1e8;

/// Normalized disk arrays shared by every mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskResponse {
    pub regime: Regime,
    pub reconstructed: bool,
    #[serde(rename = "R")]
    pub radius: Vec<f64>,
    #[serde(rename = "H")]
    pub relative_height: Vec<f64>,
    #[serde(rename = "Mdot")]
    pub accretion_rate: Vec<f64>,
    #[serde(rename = "T")]
    pub temperature: Vec<f64>,
    #[serde(rename = "rho")]
    pub density: Vec<f64>,
    #[serde(rename = "vr")]
    pub radial_velocity: Vec<f64>,
    #[serde(rename = "Qrad")]
    pub q_rad: Vec<f64>,
    #[serde(rename = "Qadv")]
    pub q_adv: Vec<f64>,
    #[serde(rename = "Ltot")]
    pub luminosity: f64,
    #[serde(rename = "Rsph")]
    pub spherization_radius: f64,
}

impl DiskResponse {
    pub fn new(disk: &impl DiskModel, plan: Plan) -> Self {
        let compact_object = disk.compact_object();
        let r_isco = compact_object.isco_radius().to_cm();
        let mdot = disk.mdot();
        let mdot_0 = disk.boundary_accretion_rate().to_grams_per_sec();
        let p = disk.profile();

        Self {
            regime: disk.regime(),
            reconstructed: plan.must_reconstruct,
            radius: p.radii.iter().map(|r| r / r_isco).collect(),
            relative_height: ratio(&p.scale_height, &p.radii),
            accretion_rate: p
                .accretion_rate
                .iter()
                .map(|m| mdot * (m / mdot_0).min(1.0))
                .collect(),
            temperature: p.temperature.iter().map(|t| t / TEMPERATURE_SCALE).collect(),
            density: p.density.clone(),
            radial_velocity: p
                .radial_velocity
                .iter()
                .map(|&v| Velocity::from_cm_per_sec(v).to_fraction_of_light())
                .collect(),
            q_rad: ratio(&p.q_rad, &p.q_vis),
            q_adv: ratio(&p.q_adv, &p.q_vis),
            luminosity: disk.luminosity() / compact_object.eddington_luminosity(),
            spherization_radius: disk
                .spherization_radius()
                .map_or(0.0, |r_sph| r_sph.to_cm() / r_isco),
        }
    }
}

fn ratio(numerator: &[f64], denominator: &[f64]) -> Vec<f64> {
    numerator
        .iter()
        .zip(denominator)
        .map(|(n, d)| n / d)
        .collect()
}

/// Response to creating the object or changing its mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactObjectResponse {
    /// Eddington luminosity in erg/s
    #[serde(rename = "LEdd")]
    pub eddington_luminosity: f64,
    /// ISCO radius in cm
    #[serde(rename = "Risco")]
    pub isco_radius: f64,
    #[serde(flatten)]
    pub disk: DiskResponse,
}

impl CompactObjectResponse {
    pub fn new(disk: &impl DiskModel, plan: Plan) -> Self {
        let compact_object = disk.compact_object();
        Self {
            eddington_luminosity: compact_object.eddington_luminosity().to_erg_per_sec(),
            isco_radius: compact_object.isco_radius().to_cm(),
            disk: DiskResponse::new(disk, plan),
        }
    }
}

/// Response to a spin change. L_Edd does not depend on spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResponse {
    #[serde(rename = "Risco")]
    pub isco_radius: f64,
    #[serde(flatten)]
    pub disk: DiskResponse,
}

impl SpinResponse {
    pub fn new(disk: &impl DiskModel, plan: Plan) -> Self {
        Self {
            isco_radius: disk.compact_object().isco_radius().to_cm(),
            disk: DiskResponse::new(disk, plan),
        }
    }
}

/// Current parameters, without profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    /// Solar masses
    pub mass: f64,
    pub spin: f64,
    pub regime: Regime,
    #[serde(flatten)]
    pub params: DiskParams,
}

impl StateResponse {
    pub fn new(disk: &impl DiskModel) -> Self {
        let compact_object = disk.compact_object();
        Self {
            mass: compact_object.mass().to_solar_masses(),
            spin: compact_object.spin(),
            regime: disk.regime(),
            params: *disk.params(),
        }
    }
}
