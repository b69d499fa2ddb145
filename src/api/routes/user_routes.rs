//! User Routes
//!
//! 定义用户相关的 API 路由。

use crate::api::handlers::user_handler::*;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::AppState;

/// 创建用户路由器
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/id/:id", get(get_user_by_id))
        .route("/users/:username", get(get_user))
        .route("/users/:username", put(update_user))
        .route("/users/:username", delete(delete_user))
        .route("/users/:username/progress", post(complete_course))
        .route("/users/:username/learning-path", get(learning_path))
        .route(
            "/users/:username/bibliographies",
            get(unlocked_bibliographies),
        )
}
