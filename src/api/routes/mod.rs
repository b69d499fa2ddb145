//! 路由模块

pub mod bibliography_routes;
pub mod course_routes;
pub mod record_routes;
pub mod user_routes;
pub mod vocation_routes;
