use approx::assert_relative_eq;

use crate::luminosity::{Luminosity, SOLAR_LUMINOSITY_ERG_S};

#[test]
fn solar_luminosity_conversion() {
    let sun = Luminosity::from_solar_luminosities(1.0);
    assert_relative_eq!(sun.to_erg_per_sec(), SOLAR_LUMINOSITY_ERG_S);
}

#[test]
fn eddington_ratio() {
    let l_edd = Luminosity::from_erg_per_sec(1.26e39);
    let l = l_edd * 0.5;

    assert_relative_eq!(l / l_edd, 0.5);
    assert_relative_eq!((l + l).to_erg_per_sec(), 1.26e39);
}
