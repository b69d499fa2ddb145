use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::record_dto::*, dto::vocation_dto::{DeleteResponse, LoadReportResponse}},
    error::AppError,
};

pub async fn create_record(
    State(state): State<AppState>,
    Json(request): Json<UpsertRecordRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating course record: {}", request.code);

    let record = state.record_service.create(request.into_record()).await?;
    Ok((StatusCode::CREATED, Json(RecordResponse::from(record))))
}

pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<ListRecordsParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(20);
    let records = state
        .record_service
        .list(page_size, (page - 1) * page_size)
        .await?;
    let total = records.len();
    let response = RecordListResponse {
        records: records.into_iter().map(RecordResponse::from).collect(),
        total,
    };
    Ok(Json(response))
}

pub async fn get_record(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.record_service.get_by_code(&code).await?;
    Ok(Json(RecordResponse::from(record)))
}

pub async fn update_record(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(request): Json<UpsertRecordRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating course record: {}", code);

    let record = state
        .record_service
        .update(&code, request.into_record())
        .await?;
    Ok(Json(RecordResponse::from(record)))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting course record: {}", code);

    state.record_service.delete(&code).await?;
    let response = DeleteResponse {
        name: code,
        message: "Course record deleted successfully".to_string(),
    };
    Ok(Json(response))
}

pub async fn prerequisite_tree(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let roots = state.record_service.prerequisite_tree().await?;
    Ok(Json(PrerequisiteTreeResponse { roots }))
}

pub async fn load_taxonomy(
    State(state): State<AppState>,
    Json(request): Json<LoadTaxonomyRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Loading taxonomy for vocation: {}", request.spec.vocation);

    let report = state.loader_service.load_taxonomy(&request.spec).await?;
    let response = LoadReportResponse {
        courses_loaded: report.courses_loaded,
        links_created: report.links_created,
        entries_skipped: report.entries_skipped,
    };
    Ok((StatusCode::CREATED, Json(response)))
}
