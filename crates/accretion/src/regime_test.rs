use units::Mass;

use crate::compact_object::CompactObject;
use crate::disk::{AccretionDisk, DiskParams};
use crate::regime::{plan, Regime};

fn black_hole() -> CompactObject {
    CompactObject::new(Mass::from_solar_masses(10.0), 0.0).unwrap()
}

fn sub_disk() -> (CompactObject, DiskParams, AccretionDisk) {
    let co = black_hole();
    let params = DiskParams::new(0.5, 0.1).with_n_radii(64);
    let disk = AccretionDisk::build(co, params).unwrap();
    (co, params, disk)
}

#[test]
fn threshold_is_strict() {
    assert_eq!(Regime::for_mdot(0.999_999), Regime::SubEddington);
    assert_eq!(Regime::for_mdot(1.0), Regime::SuperEddington);
    assert_eq!(Regime::for_mdot(100.0), Regime::SuperEddington);
}

#[test]
fn display_matches_wire_names() {
    assert_eq!(Regime::SubEddington.to_string(), "SubEddington");
    assert_eq!(
        serde_json::to_string(&Regime::SuperEddington).unwrap(),
        "\"SuperEddington\""
    );
}

#[test]
fn no_disk_always_reconstructs() {
    let plan = plan(None, &black_hole(), &DiskParams::new(0.5, 0.1));
    assert_eq!(plan.regime, Regime::SubEddington);
    assert!(plan.must_reconstruct);
}

#[test]
fn mdot_alone_updates_in_place() {
    let (co, params, disk) = sub_disk();

    let decision = plan(Some(&disk), &co, &DiskParams { mdot: 0.9, ..params });
    assert_eq!(decision.regime, Regime::SubEddington);
    assert!(!decision.must_reconstruct);

    assert!(!plan(Some(&disk), &co, &params).must_reconstruct);
}

#[test]
fn regime_change_reconstructs() {
    let (co, params, disk) = sub_disk();

    let plan = plan(Some(&disk), &co, &DiskParams { mdot: 5.0, ..params });
    assert_eq!(plan.regime, Regime::SuperEddington);
    assert!(plan.must_reconstruct);
}

#[test]
fn structural_changes_reconstruct() {
    let (co, params, disk) = sub_disk();

    let changed = [
        DiskParams { alpha: 0.2, ..params },
        DiskParams { inner_torque: -1e12, ..params },
        DiskParams { n_radii: 65, ..params },
        DiskParams { outer_radius: 1e4, ..params },
    ];
    for requested in changed {
        assert!(plan(Some(&disk), &co, &requested).must_reconstruct, "{requested:?}");
    }

    let heavier = CompactObject::new(Mass::from_solar_masses(20.0), 0.0).unwrap();
    assert!(plan(Some(&disk), &heavier, &params).must_reconstruct);

    let spinning = CompactObject::new(Mass::from_solar_masses(10.0), 0.5).unwrap();
    assert!(plan(Some(&disk), &spinning, &params).must_reconstruct);
}

#[test]
fn plan_carries_requested_resolution() {
    let (co, params, disk) = sub_disk();
    let decision = plan(Some(&disk), &co, &DiskParams { n_radii: 128, ..params });
    assert_eq!(decision.n_radii, 128);
    assert!(decision.must_reconstruct);
}
