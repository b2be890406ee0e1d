use approx::assert_relative_eq;
use units::Mass;

use crate::compact_object::CompactObject;
use crate::error::AccretionError;

fn black_hole(mass: f64, spin: f64) -> CompactObject {
    CompactObject::new(Mass::from_solar_masses(mass), spin).unwrap()
}

#[test]
fn isco_limits() {
    let schwarzschild = black_hole(10.0, 0.0);
    let rg = schwarzschild.gravitational_radius().to_cm();
    assert_relative_eq!(schwarzschild.isco_radius().to_cm(), 6.0 * rg, max_relative = 1e-12);

    let maximal = black_hole(10.0, 1.0);
    assert_relative_eq!(maximal.isco_radius().to_cm(), rg, max_relative = 1e-12);

    let retrograde = black_hole(10.0, -1.0);
    assert_relative_eq!(retrograde.isco_radius().to_cm(), 9.0 * rg, max_relative = 1e-12);
}

#[test]
fn isco_shrinks_with_prograde_spin() {
    let mut previous = f64::INFINITY;
    for spin in [-0.9, -0.5, 0.0, 0.5, 0.9, 0.998] {
        let r = black_hole(10.0, spin).isco_radius().to_cm();
        assert!(r < previous, "ISCO should shrink as spin increases");
        previous = r;
    }
}

#[test]
fn eddington_luminosity_scales_with_mass() {
    let sun = black_hole(1.0, 0.0);
    // ~1.26e38 erg/s per solar mass for ionized hydrogen
    assert_relative_eq!(sun.eddington_luminosity().to_erg_per_sec(), 1.257e38, max_relative = 0.01);

    let ten = black_hole(10.0, 0.0);
    assert_relative_eq!(
        ten.eddington_luminosity() / sun.eddington_luminosity(),
        10.0,
        max_relative = 1e-12
    );
}

#[test]
fn spin_does_not_change_eddington_luminosity() {
    let slow = black_hole(10.0, 0.0);
    let fast = black_hole(10.0, 0.9);
    assert_eq!(slow.eddington_luminosity(), fast.eddington_luminosity());
    assert!(fast.eddington_accretion_rate() < slow.eddington_accretion_rate());
}

#[test]
fn schwarzschild_efficiency_is_one_twelfth() {
    let bh = black_hole(10.0, 0.0);
    assert_relative_eq!(bh.accretion_efficiency(), 1.0 / 12.0, max_relative = 1e-12);
}

#[test]
fn derived_values_follow_mutations() {
    let mut bh = black_hole(10.0, 0.0);
    let isco_before = bh.isco_radius();

    bh.set_mass(Mass::from_solar_masses(20.0)).unwrap();
    assert_relative_eq!(bh.isco_radius() / isco_before, 2.0, max_relative = 1e-12);

    bh.set_spin(0.5).unwrap();
    assert!(bh.isco_radius().to_cm() < 2.0 * isco_before.to_cm());
}

#[test]
fn rejects_unphysical_parameters() {
    for mass in [0.0, -1.0, f64::NAN] {
        let err = CompactObject::new(Mass::from_solar_masses(mass), 0.0).unwrap_err();
        assert!(matches!(err, AccretionError::InvalidParameter { name: "mass", .. }));
    }
    for spin in [1.01, -1.5, f64::INFINITY] {
        let err = CompactObject::new(Mass::from_solar_masses(10.0), spin).unwrap_err();
        assert!(matches!(err, AccretionError::InvalidParameter { name: "spin", .. }));
    }
}

#[test]
fn failed_mutation_leaves_object_untouched() {
    let mut bh = black_hole(10.0, 0.3);
    let before = bh;

    assert!(bh.set_mass(Mass::from_solar_masses(-2.0)).is_err());
    assert!(bh.set_spin(2.0).is_err());
    assert_eq!(bh, before);
}
