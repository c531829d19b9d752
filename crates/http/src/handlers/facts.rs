use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use perfcons_core::Record;

use super::records;
use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{DeleteResponse, FactPayload};

pub async fn create_fact(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<FactPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Path(conversation_id) = path?;
    let Json(body) = payload?;
    records::create(&state.facts, &conversation_id, &body.fact).await
}

pub async fn get_fact(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(conversation_id) = path?;
    records::read(&state.facts, &conversation_id).await
}

pub async fn update_fact(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<FactPayload>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(conversation_id) = path?;
    let Json(body) = payload?;
    records::update(&state.facts, &conversation_id, &body.fact).await
}

pub async fn delete_fact(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(conversation_id) = path?;
    records::delete(&state.facts, conversation_id).await
}

pub async fn list_facts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Record>>, ApiError> {
    records::list(&state.facts).await
}
