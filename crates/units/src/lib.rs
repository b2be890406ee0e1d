pub mod length;
pub mod luminosity;
pub mod mass;
pub mod mass_rate;
pub mod velocity;

#[cfg(test)]
mod luminosity_test;
#[cfg(test)]
mod velocity_test;

pub use length::Length;
pub use luminosity::{Luminosity, SOLAR_LUMINOSITY_ERG_S};
pub use mass::{Mass, SOLAR_MASS_G};
pub use mass_rate::MassRate;
pub use velocity::{Velocity, SPEED_OF_LIGHT_CM_S};
