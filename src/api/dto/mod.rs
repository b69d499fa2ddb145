//! DTO 模块
//!
//! 定义 REST API 的请求和响应数据结构。

pub mod bibliography_dto;
pub mod course_dto;
pub mod record_dto;
pub mod user_dto;
pub mod vocation_dto;
