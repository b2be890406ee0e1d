// src/state.rs
// Shared application state

use std::sync::Arc;

use accretion::{Result, Session};
use parking_lot::Mutex;
use tokio::task;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// The one session served by this process, behind a mutex held for each
/// whole read-modify-write.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<Session>>,
    pub grid_resolution: usize,
    pub outer_radius: f64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            grid_resolution: config.grid_resolution,
            outer_radius: config.outer_radius,
        }
    }

    /// Run `f` against the locked session on the blocking pool.
    ///
    /// Disk solves take long enough to stall the async runtime.
    pub async fn with_session<T, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&mut Session) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let session = Arc::clone(&self.session);
        let result = task::spawn_blocking(move || {
            let mut session = session.lock();
            f(&mut session)
        })
        .await?;

        result.map_err(ApiError::from)
    }
}
