//! Vocation Routes
//!
//! 定义职业方向相关的 API 路由。

use crate::api::handlers::vocation_handler::*;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::AppState;

/// 创建职业方向路由器
pub fn create_vocation_router() -> Router<AppState> {
    Router::new()
        .route("/vocations", post(upsert_vocation))
        .route("/vocations", get(list_vocations))
        .route("/vocations/:name", get(get_vocation))
        .route("/vocations/:name", put(rename_vocation))
        .route("/vocations/:name", delete(delete_vocation))
        .route("/vocations/:name/courses", get(direct_courses))
        .route("/vocations/:name/branch", get(branch_of_vocation))
        .route("/vocations/:name/grouped", get(grouped_courses))
        .route("/vocations/:name/branch", post(load_branch))
        .route("/vocations/:name/offers", post(link_offer))
        .route("/vocations/:name/categories", get(list_categories))
        .route("/vocations/:name/categories", post(link_category))
        .route(
            "/vocations/:name/categories/:category/courses",
            get(courses_in_category),
        )
}
