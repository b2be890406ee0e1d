// src/config.rs
// Command line and environment configuration

use accretion::disk::{DEFAULT_N_RADII, DEFAULT_OUTER_RADIUS};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "accretion-server")]
#[command(about = "HTTP service for an accreting compact object and its disk")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "ACCRETION_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "ACCRETION_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Radial grid points used when a request does not send `N`
    #[arg(long, env = "ACCRETION_GRID_RESOLUTION", default_value_t = DEFAULT_N_RADII)]
    pub grid_resolution: usize,

    /// Outer disk edge in units of R_isco
    #[arg(long, env = "ACCRETION_OUTER_RADIUS", default_value_t = DEFAULT_OUTER_RADIUS)]
    pub outer_radius: f64,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            grid_resolution: DEFAULT_N_RADII,
            outer_radius: DEFAULT_OUTER_RADIUS,
        }
    }
}
