//! 处理器模块

pub mod bibliography_handler;
pub mod course_handler;
pub mod record_handler;
pub mod user_handler;
pub mod vocation_handler;
