// src/handlers.rs
// HTTP handlers for the compact object and its disk

use accretion::disk::DEFAULT_INNER_TORQUE;
use accretion::{
    CompactObjectResponse, DiskParams, DiskResponse, DiskUpdate, SpinResponse, StateResponse,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use units::Mass;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompactObjectRequest {
    /// Solar masses
    pub mass: f64,
    pub spin: f64,
    pub mdot: f64,
    pub alpha: f64,
    #[serde(rename = "innerTorque", default, skip_serializing_if = "Option::is_none")]
    pub inner_torque: Option<f64>,
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    pub n_radii: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MdotChangeRequest {
    pub mdot: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphaChangeRequest {
    pub alpha: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassChangeRequest {
    /// Solar masses
    pub mass: f64,
    #[serde(flatten)]
    pub update: DiskUpdate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinChangeRequest {
    pub spin: f64,
    #[serde(flatten)]
    pub update: DiskUpdate,
}

/// POST /create_compact_object
pub async fn create_compact_object(
    State(state): State<AppState>,
    Json(req): Json<CreateCompactObjectRequest>,
) -> ApiResult<Json<CompactObjectResponse>> {
    info!(mass = req.mass, spin = req.spin, mdot = req.mdot, "create compact object");

    let params = DiskParams::new(req.mdot, req.alpha)
        .with_inner_torque(req.inner_torque.unwrap_or(DEFAULT_INNER_TORQUE))
        .with_n_radii(req.n_radii.unwrap_or(state.grid_resolution))
        .with_outer_radius(state.outer_radius);

    let response = state
        .with_session(move |session| {
            let plan = session.initialize(Mass::from_solar_masses(req.mass), req.spin, params)?;
            Ok(CompactObjectResponse::new(session.current()?, plan))
        })
        .await?;

    Ok(Json(response))
}

/// POST /accretiondisk/mdot_change
pub async fn mdot_change(
    State(state): State<AppState>,
    Json(req): Json<MdotChangeRequest>,
) -> ApiResult<Json<DiskResponse>> {
    update(State(state), Json(DiskUpdate::mdot(req.mdot))).await
}

/// POST /accretiondisk/alpha_change
pub async fn alpha_change(
    State(state): State<AppState>,
    Json(req): Json<AlphaChangeRequest>,
) -> ApiResult<Json<DiskResponse>> {
    update(State(state), Json(DiskUpdate::alpha(req.alpha))).await
}

/// POST /accretiondisk/update
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<DiskUpdate>,
) -> ApiResult<Json<DiskResponse>> {
    let response = state
        .with_session(move |session| {
            let plan = session.change_mdot_or_alpha(req)?;
            Ok(DiskResponse::new(session.current()?, plan))
        })
        .await?;

    Ok(Json(response))
}

/// POST /compactobject/mass_change
pub async fn mass_change(
    State(state): State<AppState>,
    Json(req): Json<MassChangeRequest>,
) -> ApiResult<Json<CompactObjectResponse>> {
    let response = state
        .with_session(move |session| {
            let plan = session.change_mass(Mass::from_solar_masses(req.mass), req.update)?;
            Ok(CompactObjectResponse::new(session.current()?, plan))
        })
        .await?;

    Ok(Json(response))
}

/// POST /compactobject/spin_change
pub async fn spin_change(
    State(state): State<AppState>,
    Json(req): Json<SpinChangeRequest>,
) -> ApiResult<Json<SpinResponse>> {
    let response = state
        .with_session(move |session| {
            let plan = session.change_spin(req.spin, req.update)?;
            Ok(SpinResponse::new(session.current()?, plan))
        })
        .await?;

    Ok(Json(response))
}

/// GET /state
pub async fn current_state(State(state): State<AppState>) -> ApiResult<Json<StateResponse>> {
    let response = state
        .with_session(|session| Ok(StateResponse::new(session.current()?)))
        .await?;

    Ok(Json(response))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let initialized = state
        .with_session(|session| Ok(session.is_initialized()))
        .await?;

    Ok(Json(json!({
        "status": "ok",
        "initialized": initialized,
    })))
}
