//! Bibliography Routes
//!
//! 定义书目相关的 API 路由。

use crate::api::handlers::bibliography_handler::*;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::AppState;

/// 创建书目路由器
pub fn create_bibliography_router() -> Router<AppState> {
    Router::new()
        .route("/bibliographies", post(create_bibliography))
        .route("/bibliographies", get(list_bibliographies))
        .route("/bibliographies/search", post(search_bibliographies))
        .route("/bibliographies/:title", get(get_bibliography))
        .route("/bibliographies/:title", put(update_bibliography))
        .route("/bibliographies/:title", delete(delete_bibliography))
}
