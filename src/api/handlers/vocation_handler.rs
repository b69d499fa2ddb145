use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::course_dto::*, dto::vocation_dto::*},
    error::AppError,
    models::course::Difficulty,
    models::vocation::Vocation,
};

fn to_response(vocation: Vocation) -> VocationResponse {
    VocationResponse {
        id: vocation.id,
        name: vocation.name,
        description: vocation.description,
        created_at: vocation.created_at,
    }
}

pub async fn upsert_vocation(
    State(state): State<AppState>,
    Json(request): Json<UpsertVocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Upserting vocation: {}", request.name);

    let vocation = state
        .catalog_service
        .upsert_vocation(&request.name, request.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(to_response(vocation))))
}

pub async fn list_vocations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vocations = state.catalog_service.list_vocations().await?;
    let total = vocations.len();
    let response = VocationListResponse {
        vocations: vocations.into_iter().map(to_response).collect(),
        total,
    };
    Ok(Json(response))
}

pub async fn get_vocation(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let vocation = state.catalog_service.get_vocation(&name).await?;
    Ok(Json(to_response(vocation)))
}

pub async fn rename_vocation(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<RenameVocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Renaming vocation {} -> {}", name, request.new_name);

    state
        .catalog_service
        .rename_vocation(&name, &request.new_name)
        .await?;
    let vocation = state.catalog_service.get_vocation(&request.new_name).await?;
    Ok(Json(to_response(vocation)))
}

pub async fn delete_vocation(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting vocation: {}", name);

    state.catalog_service.delete_vocation(&name).await?;
    let response = DeleteResponse {
        name,
        message: "Vocation deleted successfully".to_string(),
    };
    Ok(Json(response))
}

pub async fn direct_courses(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let courses = state.catalog_service.direct_courses(&name).await?;
    let total = courses.len();
    let response = CourseListResponse {
        courses: courses
            .into_iter()
            .map(|c| CourseResponse {
                id: c.id,
                name: c.name,
                difficulty: c.difficulty,
                created_at: c.created_at,
            })
            .collect(),
        total,
    };
    Ok(Json(response))
}

pub async fn branch_of_vocation(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let branch = state.path_service.branch_of_vocation(&name).await?;
    let response = BranchResponse {
        vocation: name,
        courses: branch
            .into_iter()
            .map(|c| LeveledCourseResponse {
                name: c.name,
                difficulty: c.difficulty,
                level: c.level,
            })
            .collect(),
    };
    Ok(Json(response))
}

pub async fn grouped_courses(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let groups = state
        .path_service
        .courses_by_difficulty_grouped(&name)
        .await?;
    let response = GroupedCoursesResponse {
        vocation: name,
        groups: groups
            .into_iter()
            .map(|g| DifficultyGroupResponse {
                difficulty: g.difficulty,
                courses: g
                    .courses
                    .into_iter()
                    .map(|c| LeveledCourseResponse {
                        name: c.name,
                        difficulty: c.difficulty,
                        level: c.level,
                    })
                    .collect(),
            })
            .collect(),
    };
    Ok(Json(response))
}

pub async fn link_offer(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<LinkOfferRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Linking vocation {} -> course {}", name, request.course);

    let created = state
        .catalog_service
        .link_offer(&name, &request.course)
        .await?;
    Ok((StatusCode::CREATED, Json(LinkResponse { created })))
}

pub async fn load_branch(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<LoadBranchRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Loading branch for vocation: {}", name);

    let report = state
        .loader_service
        .load_branch(&name, &request.branches)
        .await?;
    let response = LoadReportResponse {
        courses_loaded: report.courses_loaded,
        links_created: report.links_created,
        entries_skipped: report.entries_skipped,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_categories(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.catalog_service.categories_of(&name).await?;
    let response = CategoryListResponse {
        vocation: name,
        categories: categories
            .into_iter()
            .map(|c| CategoryResponse {
                id: c.id,
                name: c.name,
                description: c.description,
            })
            .collect(),
    };
    Ok(Json(response))
}

pub async fn link_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<LinkCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .catalog_service
        .link_category(&name, &request.category)
        .await?;
    Ok((StatusCode::CREATED, Json(LinkResponse { created })))
}

#[derive(Debug, Deserialize, Default)]
pub struct CategoryCoursesParams {
    pub difficulty: Option<String>,
}

pub async fn courses_in_category(
    State(state): State<AppState>,
    Path((name, category)): Path<(String, String)>,
    Query(params): Query<CategoryCoursesParams>,
) -> Result<impl IntoResponse, AppError> {
    let difficulty = params
        .difficulty
        .as_deref()
        .map(|d| {
            d.parse::<Difficulty>()
                .map_err(AppError::Validation)
        })
        .transpose()?;

    let courses = state
        .catalog_service
        .courses_in_category(&name, &category, difficulty)
        .await?;
    let total = courses.len();
    let response = CourseListResponse {
        courses: courses
            .into_iter()
            .map(|c| CourseResponse {
                id: c.id,
                name: c.name,
                difficulty: c.difficulty,
                created_at: c.created_at,
            })
            .collect(),
        total,
    };
    Ok(Json(response))
}
