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
use crate::api_types::{BudgetPayload, DeleteResponse};

pub async fn create_budget(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<BudgetPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Path(conversation_id) = path?;
    let Json(body) = payload?;
    records::create(&state.budgets, &conversation_id, &body.budget).await
}

pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(conversation_id) = path?;
    records::read(&state.budgets, &conversation_id).await
}

pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<BudgetPayload>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(conversation_id) = path?;
    let Json(body) = payload?;
    records::update(&state.budgets, &conversation_id, &body.budget).await
}

pub async fn delete_budget(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(conversation_id) = path?;
    records::delete(&state.budgets, conversation_id).await
}

pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Record>>, ApiError> {
    records::list(&state.budgets).await
}
