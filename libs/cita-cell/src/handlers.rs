// libs/cita-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::error::{cita_not_found, AgendaFailure, Operation};
use crate::models::{Cita, CitasMesQuery, DailyAgenda, Lookup, MSG_CITA_ELIMINADA};
use crate::state::CitaState;

// ==============================================================================
// CRUD HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn create_cita(
    State(state): State<Arc<CitaState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Cita>), AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let cita = state.citas.create(payload)
        .await
        .map_err(|e| e.into_app_error(Operation::Create))?;

    Ok((StatusCode::CREATED, Json(cita)))
}

#[axum::debug_handler]
pub async fn list_citas(
    State(state): State<Arc<CitaState>>,
) -> Result<Json<Vec<Cita>>, AppError> {
    let citas = state.citas.list()
        .await
        .map_err(|e| e.into_app_error(Operation::List))?;

    Ok(Json(citas))
}

#[axum::debug_handler]
pub async fn get_cita(
    State(state): State<Arc<CitaState>>,
    Path(cita_id): Path<String>,
) -> Result<Json<Cita>, AppError> {
    let lookup = state.citas.get(&cita_id)
        .await
        .map_err(|e| e.into_app_error(Operation::Get))?;

    match lookup {
        Lookup::Found(cita) => Ok(Json(cita)),
        Lookup::NotFound => Err(cita_not_found()),
    }
}

#[axum::debug_handler]
pub async fn update_cita(
    State(state): State<Arc<CitaState>>,
    Path(cita_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Cita>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let lookup = state.citas.update(&cita_id, payload)
        .await
        .map_err(|e| e.into_app_error(Operation::Update))?;

    match lookup {
        Lookup::Found(cita) => Ok(Json(cita)),
        Lookup::NotFound => Err(cita_not_found()),
    }
}

#[axum::debug_handler]
pub async fn delete_cita(
    State(state): State<Arc<CitaState>>,
    Path(cita_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let lookup = state.citas.delete(&cita_id)
        .await
        .map_err(|e| e.into_app_error(Operation::Delete))?;

    match lookup {
        Lookup::Found(_) => Ok(Json(json!({ "message": MSG_CITA_ELIMINADA }))),
        Lookup::NotFound => Err(cita_not_found()),
    }
}

// ==============================================================================
// AGENDA HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_citas_by_month(
    State(state): State<Arc<CitaState>>,
    query: Result<Query<CitasMesQuery>, QueryRejection>,
) -> Result<Json<Vec<Cita>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let citas = state.agenda.citas_por_mes(query)
        .await
        .map_err(|e| e.into_app_error(Operation::ListByMonth))?;

    Ok(Json(citas))
}

#[axum::debug_handler]
pub async fn list_citas_today(
    State(state): State<Arc<CitaState>>,
) -> Result<Json<DailyAgenda>, AgendaFailure> {
    let agenda = state.agenda.citas_de_hoy().await?;
    Ok(Json(agenda))
}
