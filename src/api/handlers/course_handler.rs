use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::course_dto::*, dto::vocation_dto::{DeleteResponse, LinkResponse}},
    error::AppError,
    models::course::{Course, Difficulty},
};

fn to_response(course: Course) -> CourseResponse {
    CourseResponse {
        id: course.id,
        name: course.name,
        difficulty: course.difficulty,
        created_at: course.created_at,
    }
}

pub async fn upsert_course(
    State(state): State<AppState>,
    Json(request): Json<UpsertCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Upserting course: {}", request.name);

    let course = state
        .catalog_service
        .upsert_course(&request.name, request.difficulty)
        .await?;
    Ok((StatusCode::CREATED, Json(to_response(course))))
}

pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<ListCoursesParams>,
) -> Result<impl IntoResponse, AppError> {
    let courses = match params.difficulty.as_deref() {
        Some(raw) => {
            let difficulty = raw
                .parse::<Difficulty>()
                .map_err(AppError::Validation)?;
            state.catalog_service.courses_by_difficulty(difficulty).await?
        }
        None => state.catalog_service.list_courses().await?,
    };

    let total = courses.len();
    let response = CourseListResponse {
        courses: courses.into_iter().map(to_response).collect(),
        total,
    };
    Ok(Json(response))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let course = state.catalog_service.get_course(&name).await?;
    Ok(Json(to_response(course)))
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating course: {}", name);

    state
        .catalog_service
        .update_course(&name, request.new_name.as_deref(), request.new_difficulty)
        .await?;

    let final_name = request.new_name.as_deref().unwrap_or(&name);
    let course = state.catalog_service.get_course(final_name).await?;
    Ok(Json(to_response(course)))
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting course: {}", name);

    state.catalog_service.delete_course(&name).await?;
    let response = DeleteResponse {
        name,
        message: "Course deleted successfully".to_string(),
    };
    Ok(Json(response))
}

pub async fn link_precedence(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<LinkPrecedenceRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Linking precedence {} -> {}", name, request.successor);

    let created = state
        .catalog_service
        .link_precedence(&name, &request.successor)
        .await?;
    Ok((StatusCode::CREATED, Json(LinkResponse { created })))
}

pub async fn predecessor_branch(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let branch = state
        .path_service
        .predecessor_branch(std::slice::from_ref(&name))
        .await?;
    let response = PredecessorBranchResponse {
        predecessors: branch
            .into_iter()
            .filter(|node| node.name != name)
            .map(Into::into)
            .collect(),
        course: name,
    };
    Ok(Json(response))
}

pub async fn next_courses(
    State(state): State<AppState>,
    Json(request): Json<NextCoursesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let courses = state.path_service.next_courses(&request.completed).await?;
    let total = courses.len();
    let response = CourseListResponse {
        courses: courses.into_iter().map(to_response).collect(),
        total,
    };
    Ok(Json(response))
}
