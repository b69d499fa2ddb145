use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{
        app_state::AppState,
        dto::bibliography_dto::BibliographyResponse,
        dto::user_dto::*,
        dto::vocation_dto::{DeleteResponse, LeveledCourseResponse},
    },
    error::AppError,
    models::path::LeveledCourse,
    services::user::UserChanges,
};

fn leveled(course: LeveledCourse) -> LeveledCourseResponse {
    LeveledCourseResponse {
        name: course.name,
        difficulty: course.difficulty,
        level: course.level,
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating user: {}", request.username);

    let user = state
        .user_service
        .create(&request.username, request.birth_date, &request.vocation)
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<impl IntoResponse, AppError> {
    let users = match params.vocation.as_deref() {
        Some(vocation) => state.user_service.list_by_vocation(vocation).await?,
        None => {
            let page = params.page.unwrap_or(1).max(1);
            let page_size = params.page_size.unwrap_or(20);
            state
                .user_service
                .list(page_size, (page - 1) * page_size)
                .await?
        }
    };
    let total = users.len();
    let response = UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total,
    };
    Ok(Json(response))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.get_by_username(&username).await?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.get_by_id(&id).await?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating user: {}", username);

    let changes = UserChanges {
        username: request.username,
        birth_date: request.birth_date,
        vocation: request.vocation,
        progress: request.progress,
    };
    let user = state.user_service.update(&username, changes).await?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting user: {}", username);

    state.user_service.delete(&username).await?;
    let response = DeleteResponse {
        name: username,
        message: "User deleted successfully".to_string(),
    };
    Ok(Json(response))
}

pub async fn complete_course(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<CompleteCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("User {} completing course {}", username, request.course);

    let user = state
        .user_service
        .complete_course(&username, &request.course)
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// 学习路径视图：完整分支、下一步推荐与已解锁书目
pub async fn learning_path(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.get_by_username(&username).await?;
    let path = state.path_service.recommendations_for(&user).await?;
    // 解锁书目看视图里展示的课程，而不是只看已完成的
    let unlocked = state
        .bibliography_service
        .unlocked_for(&path.visible_courses())
        .await?;

    let response = LearningPathResponse {
        username: path.username,
        vocation: path.vocation,
        completed: path.completed,
        route: path.route.into_iter().map(leveled).collect(),
        next: path.next.into_iter().map(leveled).collect(),
        unlocked_bibliographies: unlocked
            .into_iter()
            .map(BibliographyResponse::from)
            .collect(),
    };
    Ok(Json(response))
}

pub async fn unlocked_bibliographies(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.get_by_username(&username).await?;
    let unlocked = state
        .bibliography_service
        .unlocked_for(&user.progress)
        .await?;

    let response: Vec<BibliographyResponse> = unlocked
        .into_iter()
        .map(BibliographyResponse::from)
        .collect();
    Ok(Json(response))
}
