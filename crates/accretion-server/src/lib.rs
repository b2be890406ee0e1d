// src/lib.rs
// HTTP surface over a single accretion session

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Create the service router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/state", get(handlers::current_state))
        .route("/create_compact_object", post(handlers::create_compact_object))
        .route("/accretiondisk/mdot_change", post(handlers::mdot_change))
        .route("/accretiondisk/alpha_change", post(handlers::alpha_change))
        .route("/accretiondisk/update", post(handlers::update))
        .route("/compactobject/mass_change", post(handlers::mass_change))
        .route("/compactobject/spin_change", post(handlers::spin_change))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
