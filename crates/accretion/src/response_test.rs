use approx::assert_relative_eq;
use units::Mass;

use crate::compact_object::CompactObject;
use crate::constants::C;
use crate::disk::{AccretionDisk, DiskModel, DiskParams};
use crate::regime::{Plan, Regime};
use crate::response::{CompactObjectResponse, DiskResponse, SpinResponse, StateResponse};

fn build(mdot: f64) -> AccretionDisk {
    let co = CompactObject::new(Mass::from_solar_masses(10.0), 0.5).unwrap();
    AccretionDisk::build(co, DiskParams::new(mdot, 0.1).with_n_radii(300)).unwrap()
}

fn rebuilt(disk: &AccretionDisk) -> Plan {
    Plan {
        regime: disk.regime(),
        must_reconstruct: true,
        n_radii: disk.n_radii(),
    }
}

#[test]
fn radii_are_in_isco_units() {
    let disk = build(0.5);
    let out = DiskResponse::new(&disk, rebuilt(&disk));

    assert_eq!(out.radius[0], 1.0);
    assert_relative_eq!(out.radius[299], 1e5, max_relative = 1e-12);
    assert!(out.reconstructed);
}

#[test]
fn profiles_are_normalized() {
    let disk = build(0.5);
    let out = DiskResponse::new(&disk, rebuilt(&disk));
    let p = disk.profile();

    for i in [0, 10, 150, 299] {
        assert_relative_eq!(out.relative_height[i], p.scale_height[i] / p.radii[i]);
        assert_relative_eq!(out.radial_velocity[i], p.radial_velocity[i] / C);
        assert_relative_eq!(out.temperature[i] * 1e8, p.temperature[i], max_relative = 1e-12);
        assert_eq!(out.density[i], p.density[i]);
        assert_relative_eq!(out.accretion_rate[i], 0.5, max_relative = 1e-12);
        assert_eq!(out.q_rad[i], 1.0);
        assert_eq!(out.q_adv[i], 0.0);
    }
    assert_relative_eq!(out.luminosity, 0.5, max_relative = 1e-2);
    assert_eq!(out.spherization_radius, 0.0);
}

#[test]
fn super_eddington_fractions_add_up() {
    let disk = build(10.0);
    let out = DiskResponse::new(&disk, rebuilt(&disk));

    assert_eq!(out.regime, Regime::SuperEddington);
    assert_relative_eq!(out.spherization_radius, 10.0 * 5.0 / 3.0, max_relative = 1e-12);
    for i in 0..out.radius.len() {
        assert_relative_eq!(out.q_rad[i] + out.q_adv[i], 1.0, max_relative = 1e-9);
        assert!(out.accretion_rate[i] <= 10.0);
    }
}

#[test]
fn compact_object_response_uses_wire_keys() {
    let disk = build(0.5);
    let out = CompactObjectResponse::new(&disk, rebuilt(&disk));
    let json = serde_json::to_value(&out).unwrap();

    for key in [
        "LEdd", "Risco", "R", "H", "Mdot", "T", "rho", "vr", "Qrad", "Qadv", "Ltot", "Rsph",
        "regime", "reconstructed",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["regime"], "SubEddington");
    assert_eq!(
        json["LEdd"].as_f64().unwrap(),
        disk.compact_object().eddington_luminosity().to_erg_per_sec()
    );

    let back: CompactObjectResponse = serde_json::from_value(json).unwrap();
    assert_eq!(back, out);
}

#[test]
fn spin_response_has_no_eddington_luminosity() {
    let disk = build(2.0);
    let out = SpinResponse::new(&disk, rebuilt(&disk));
    let json = serde_json::to_value(&out).unwrap();

    assert!(json.get("LEdd").is_none());
    assert_eq!(
        json["Risco"].as_f64().unwrap(),
        disk.compact_object().isco_radius().to_cm()
    );
}

#[test]
fn state_response_lists_parameters() {
    let disk = build(2.0);
    let json = serde_json::to_value(StateResponse::new(&disk)).unwrap();

    assert_eq!(json["mass"], 10.0);
    assert_eq!(json["spin"], 0.5);
    assert_eq!(json["mdot"], 2.0);
    assert_eq!(json["alpha"], 0.1);
    assert_eq!(json["N"], 300);
    assert_eq!(json["innerTorque"], -1e10);
    assert_eq!(json["regime"], "SuperEddington");
}
