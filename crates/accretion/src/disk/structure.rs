//! Local vertical structure on a logarithmic radial grid.
//!
//! Both disk variants solve the same algebraic equations at every radius and
//! differ only in how much mass reaches that radius ([`AccretionLaw`]) and
//! whether trapped photons are advected inward.
//!
//! At radius R, with Ω = √(GM/R³) and J(R) the angular momentum flux
//! carried in through R:
//!
//! ```text
//! W_rφ = -J / (2π R²) + W_in (R_in / R)²     vertically integrated stress
//! Q_vis = -(3/4) Ω W_rφ                      per face
//! H     = κ Q_rad / (c Ω²)  with  H ≤ R       radiation-pressure support
//! ρ     = -W_rφ / (2 α Ω² H³)
//! v_r   = Ṁ(R) / (4π R H ρ)
//! T     = (3 ρ Ω² H² / a)^(1/4)
//! ```
//!
//! # References
//! - Shakura & Sunyaev (1973) - "Black holes in binary systems"
//! - Lipunova (1999) - "Supercritical disk accretion with mass loss"

use units::Luminosity;

use super::params::DiskParams;
use crate::compact_object::CompactObject;
use crate::constants::{A_RAD, C, G, KAPPA_ES, PI};
use crate::error::{AccretionError, Result};

/// Radial arrays of a solved disk, all on the same grid (increasing radius).
///
/// Values are CGS: radii and scale heights in cm, accretion rate in g/s,
/// temperature in K, density in g/cm³, velocity in cm/s and heating rates in
/// erg/(cm²·s) per face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadialProfile {
    pub radii: Vec<f64>,
    pub scale_height: Vec<f64>,
    pub accretion_rate: Vec<f64>,
    pub temperature: Vec<f64>,
    pub density: Vec<f64>,
    pub radial_velocity: Vec<f64>,
    pub q_rad: Vec<f64>,
    pub q_vis: Vec<f64>,
    pub q_adv: Vec<f64>,
}

impl RadialProfile {
    fn with_capacity(n: usize) -> Self {
        Self {
            radii: Vec::with_capacity(n),
            scale_height: Vec::with_capacity(n),
            accretion_rate: Vec::with_capacity(n),
            temperature: Vec::with_capacity(n),
            density: Vec::with_capacity(n),
            radial_velocity: Vec::with_capacity(n),
            q_rad: Vec::with_capacity(n),
            q_vis: Vec::with_capacity(n),
            q_adv: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// L = ∫ 2 Q_rad 2πR dR over both faces, trapezoidal rule.
    pub fn luminosity(&self) -> Luminosity {
        let total = self
            .radii
            .windows(2)
            .zip(self.q_rad.windows(2))
            .map(|(r, q)| {
                let f1 = 4.0 * PI * r[0] * q[0];
                let f2 = 4.0 * PI * r[1] * q[1];
                0.5 * (f1 + f2) * (r[1] - r[0])
            })
            .sum();

        Luminosity::from_erg_per_sec(total)
    }
}

/// How much mass and angular momentum flow in through a given radius.
pub(crate) trait AccretionLaw {
    /// Ṁ(R) in g/s.
    fn local_rate(&self, r: f64) -> f64;

    /// J(R) = ∫_{R_in}^{R} Ṁ(r) d(√(GMr)), in g·cm²/s².
    fn angular_momentum_flux(&self, r: f64) -> f64;

    /// Whether photons trapped in the inflow are advected rather than radiated.
    fn traps_photons(&self) -> bool {
        false
    }
}

/// Logarithmic grid from R_isco to `outer_radius` × R_isco.
pub(crate) fn radial_grid(compact_object: &CompactObject, params: &DiskParams) -> Vec<f64> {
    let r_in = compact_object.isco_radius().to_cm();
    log_spaced_grid(r_in, r_in * params.outer_radius, params.n_radii)
}

/// Generate a logarithmically spaced grid whose end points are exact.
pub(crate) fn log_spaced_grid(r_min: f64, r_max: f64, n: usize) -> Vec<f64> {
    let log_min = r_min.ln();
    let log_max = r_max.ln();

    (0..n)
        .map(|i| match i {
            0 => r_min,
            i if i == n - 1 => r_max,
            i => {
                let frac = i as f64 / (n - 1) as f64;
                (log_min + frac * (log_max - log_min)).exp()
            }
        })
        .collect()
}

/// Solve the local structure at every grid radius.
///
/// # Errors
/// `ReconstructionFailure` at the first radius where the solution is not
/// physical: a non-negative stress (no outward angular momentum transport),
/// or any non-finite or non-positive scale height or density.
pub(crate) fn solve(
    compact_object: &CompactObject,
    params: &DiskParams,
    radii: &[f64],
    law: &impl AccretionLaw,
) -> Result<RadialProfile> {
    let gm = G * compact_object.mass().to_grams();
    let r_in = compact_object.isco_radius().to_cm();
    let mut profile = RadialProfile::with_capacity(radii.len());

    for (i, &r) in radii.iter().enumerate() {
        let omega_sq = gm / r.powi(3);
        let omega = omega_sq.sqrt();
        let mdot = law.local_rate(r);

        let stress = -law.angular_momentum_flux(r) / (2.0 * PI * r * r)
            + params.inner_torque * (r_in / r).powi(2);
        let q_vis = -0.75 * omega * stress;
        if !(q_vis.is_finite() && q_vis > 0.0) {
            return Err(failure(i, r, "stress must be negative (outward angular momentum transport)"));
        }

        // Thin-disk height if every photon escaped.
        let h_thin = KAPPA_ES * q_vis / (C * omega_sq);
        let h = if law.traps_photons() {
            trapped_scale_height(h_thin, KAPPA_ES * mdot / (4.0 * PI * C * r * r))
        } else {
            h_thin
        }
        .min(r);
        let (q_rad, q_adv) = if h < h_thin {
            let q_rad = C * omega_sq * h / KAPPA_ES;
            (q_rad, q_vis - q_rad)
        } else {
            (q_vis, 0.0)
        };

        let rho = -stress / (2.0 * params.alpha * omega_sq * h.powi(3));
        let v_r = mdot / (4.0 * PI * r * h * rho);
        let temperature = (3.0 * rho * omega_sq * h * h / A_RAD).powf(0.25);

        if !(h.is_finite() && h > 0.0) {
            return Err(failure(i, r, "non-positive scale height"));
        }
        if !(rho.is_finite() && rho > 0.0) {
            return Err(failure(i, r, "non-positive density"));
        }
        if !(v_r.is_finite() && temperature.is_finite()) {
            return Err(failure(i, r, "non-finite velocity or temperature"));
        }

        profile.radii.push(r);
        profile.scale_height.push(h);
        profile.accretion_rate.push(mdot);
        profile.temperature.push(temperature);
        profile.density.push(rho);
        profile.radial_velocity.push(v_r);
        profile.q_rad.push(q_rad);
        profile.q_vis.push(q_vis);
        profile.q_adv.push(q_adv);
    }

    Ok(profile)
}

/// Scale height once trapped photons are carried inward.
///
/// The advected fraction is t_diff / (t_diff + t_inflow) = xH / (1 + xH)
/// with x = κṀ / (4πcR²). Radiating only the remainder gives
/// H = h_thin / (1 + xH), i.e. x H² + H - h_thin = 0.
fn trapped_scale_height(h_thin: f64, x: f64) -> f64 {
    2.0 * h_thin / (1.0 + (1.0 + 4.0 * x * h_thin).sqrt())
}

fn failure(index: usize, r: f64, reason: &str) -> AccretionError {
    AccretionError::ReconstructionFailure(format!(
        "{reason} at grid point {index} (R = {r:.6e} cm)"
    ))
}
