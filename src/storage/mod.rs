//! 存储层
//!
//! 图谱侧（职业方向、课程及其关系边）与文档侧（用户、
//! 课程元数据、书目）共用同一个 SurrealDB 实例。

pub mod graph;
#[cfg(test)]
pub mod memory;
pub mod repository;
pub mod surrealdb;

pub use graph::{CourseGraph, SurrealCourseGraph};
pub use repository::{
    BibliographyRepository, CourseRecordRepository, Repository, UserRepository,
};
pub use surrealdb::SurrealPool;
