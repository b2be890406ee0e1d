use units::Mass;

use crate::compact_object::CompactObject;
use crate::disk::{AccretionDisk, DiskModel, DiskParams};
use crate::error::AccretionError;
use crate::regime::Regime;

fn black_hole() -> CompactObject {
    CompactObject::new(Mass::from_solar_masses(10.0), 0.3).unwrap()
}

#[test]
fn build_picks_variant_by_mdot() {
    let sub = AccretionDisk::build(black_hole(), DiskParams::new(0.5, 0.1).with_n_radii(64))
        .unwrap();
    assert!(matches!(sub, AccretionDisk::SubEddington(_)));
    assert_eq!(sub.regime(), Regime::SubEddington);
    assert!(sub.spherization_radius().is_none());

    let sup = AccretionDisk::build(black_hole(), DiskParams::new(5.0, 0.1).with_n_radii(64))
        .unwrap();
    assert!(matches!(sup, AccretionDisk::SuperEddington(_)));
    assert_eq!(sup.regime(), Regime::SuperEddington);
    assert!(sup.spherization_radius().is_some());
}

#[test]
fn delegates_to_variant() {
    let co = black_hole();
    let params = DiskParams::new(2.0, 0.2).with_n_radii(64);
    let disk = AccretionDisk::build(co, params).unwrap();

    assert_eq!(disk.compact_object(), &co);
    assert_eq!(disk.params(), &params);
    assert_eq!(disk.n_radii(), 64);
    assert_eq!(disk.mdot(), 2.0);
    assert_eq!(disk.alpha(), 0.2);
}

#[test]
fn set_mdot_within_regime() {
    let co = black_hole();
    let params = DiskParams::new(0.1, 0.1).with_n_radii(64);
    let mut disk = AccretionDisk::build(co, params).unwrap();

    disk.set_mdot(0.6).unwrap();
    let fresh = AccretionDisk::build(co, DiskParams { mdot: 0.6, ..params }).unwrap();
    assert_eq!(disk, fresh);
}

#[test]
fn set_mdot_refuses_regime_change() {
    let mut disk =
        AccretionDisk::build(black_hole(), DiskParams::new(0.5, 0.1).with_n_radii(64)).unwrap();
    let before = disk.clone();

    let result = disk.set_mdot(5.0);
    assert!(matches!(
        result,
        Err(AccretionError::InvalidParameter { name: "mdot", .. })
    ));
    assert_eq!(disk, before);
}

#[test]
fn build_validates_params() {
    let result = AccretionDisk::build(black_hole(), DiskParams::new(-1.0, 0.1));
    assert!(matches!(
        result,
        Err(AccretionError::InvalidParameter { name: "mdot", .. })
    ));
}
