//! Course Routes
//!
//! 定义课程相关的 API 路由。

use crate::api::handlers::course_handler::*;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::AppState;

/// 创建课程路由器
pub fn create_course_router() -> Router<AppState> {
    Router::new()
        .route("/courses", post(upsert_course))
        .route("/courses", get(list_courses))
        .route("/courses/next", post(next_courses))
        .route("/courses/:name", get(get_course))
        .route("/courses/:name", put(update_course))
        .route("/courses/:name", delete(delete_course))
        .route("/courses/:name/precedes", post(link_precedence))
        .route("/courses/:name/predecessors", get(predecessor_branch))
}
