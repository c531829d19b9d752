//! Resource-agnostic handler bodies; `facts` and `budgets` unwrap their own
//! payload type and delegate here.

use axum::Json;
use axum::http::StatusCode;
use perfcons_core::Record;
use perfcons_service::RecordService;

use crate::api_error::ApiError;
use crate::api_types::DeleteResponse;

pub(super) async fn create(
    service: &RecordService,
    conversation_id: &str,
    text: &str,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let record = service.create(conversation_id, text).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub(super) async fn read(
    service: &RecordService,
    conversation_id: &str,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(service.get(conversation_id).await?))
}

pub(super) async fn update(
    service: &RecordService,
    conversation_id: &str,
    text: &str,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(service.update(conversation_id, text).await?))
}

pub(super) async fn delete(
    service: &RecordService,
    conversation_id: String,
) -> Result<Json<DeleteResponse>, ApiError> {
    service.delete(&conversation_id).await?;
    Ok(Json(DeleteResponse { deleted: true, conversation_id }))
}

pub(super) async fn list(service: &RecordService) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(service.list().await?))
}
