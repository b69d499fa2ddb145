//! Catalog Routes
//!
//! 定义课程元数据目录相关的 API 路由。

use crate::api::handlers::record_handler::*;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::AppState;

/// 创建目录路由器
pub fn create_record_router() -> Router<AppState> {
    Router::new()
        .route("/catalog/records", post(create_record))
        .route("/catalog/records", get(list_records))
        .route("/catalog/records/:code", get(get_record))
        .route("/catalog/records/:code", put(update_record))
        .route("/catalog/records/:code", delete(delete_record))
        .route("/catalog/prerequisite-tree", get(prerequisite_tree))
        .route("/catalog/taxonomy", post(load_taxonomy))
}
