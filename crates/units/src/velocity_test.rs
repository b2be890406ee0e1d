use approx::assert_relative_eq;

use crate::velocity::{Velocity, SPEED_OF_LIGHT_CM_S};

#[test]
fn fraction_of_light() {
    let v = Velocity::from_cm_per_sec(0.1 * SPEED_OF_LIGHT_CM_S);
    assert_relative_eq!(v.to_fraction_of_light(), 0.1);

    let beta = Velocity::from_fraction_of_light(0.25);
    assert_relative_eq!(beta.to_cm_per_sec(), 0.25 * SPEED_OF_LIGHT_CM_S);
}

#[test]
fn km_per_sec() {
    let v = Velocity::from_km_per_sec(300.0);
    assert_relative_eq!(v.to_cm_per_sec(), 3.0e7);
    assert_relative_eq!(v.to_km_per_sec(), 300.0);
}
