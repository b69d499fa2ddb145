use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::bibliography_dto::*, dto::vocation_dto::DeleteResponse},
    error::AppError,
    models::bibliography::Bibliography,
    services::bibliography::BibliographyChanges,
};

pub async fn create_bibliography(
    State(state): State<AppState>,
    Json(request): Json<CreateBibliographyRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating bibliography: {}", request.title);

    let mut biblio = Bibliography::new(&request.title, &request.author);
    biblio.link = request.link;
    biblio.description = request.description;

    let created = state.bibliography_service.create(biblio).await?;
    Ok((StatusCode::CREATED, Json(BibliographyResponse::from(created))))
}

pub async fn list_bibliographies(
    State(state): State<AppState>,
    Query(params): Query<ListBibliographiesParams>,
) -> Result<impl IntoResponse, AppError> {
    let bibliographies = match params.titles.as_deref() {
        Some(raw) => {
            let titles: Vec<String> = raw
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            state.bibliography_service.find_by_titles(&titles).await?
        }
        None => {
            let page = params.page.unwrap_or(1).max(1);
            let page_size = params.page_size.unwrap_or(20);
            state
                .bibliography_service
                .list(page_size, (page - 1) * page_size)
                .await?
        }
    };

    let total = bibliographies.len();
    let response = BibliographyListResponse {
        bibliographies: bibliographies
            .into_iter()
            .map(BibliographyResponse::from)
            .collect(),
        total,
    };
    Ok(Json(response))
}

pub async fn search_bibliographies(
    State(state): State<AppState>,
    Json(request): Json<SearchBibliographiesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let bibliographies = state
        .bibliography_service
        .find_by_titles(&request.titles)
        .await?;
    let total = bibliographies.len();
    let response = BibliographyListResponse {
        bibliographies: bibliographies
            .into_iter()
            .map(BibliographyResponse::from)
            .collect(),
        total,
    };
    Ok(Json(response))
}

pub async fn get_bibliography(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let biblio = state.bibliography_service.get_by_title(&title).await?;
    Ok(Json(BibliographyResponse::from(biblio)))
}

pub async fn update_bibliography(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(request): Json<UpdateBibliographyRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating bibliography: {}", title);

    let changes = BibliographyChanges {
        author: request.author,
        link: request.link,
        description: request.description,
    };
    let updated = state.bibliography_service.update(&title, changes).await?;
    Ok(Json(BibliographyResponse::from(updated)))
}

pub async fn delete_bibliography(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting bibliography: {}", title);

    state.bibliography_service.delete(&title).await?;
    let response = DeleteResponse {
        name: title,
        message: "Bibliography deleted successfully".to_string(),
    };
    Ok(Json(response))
}
