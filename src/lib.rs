//! Pathways - 学习路径推荐服务
//!
//! 以课程图谱（职业方向 → 分类/难度 → 课程）为核心，结合用户档案与
//! 课程元数据文档，为用户计算前置/后继课程分支并推荐下一步课程。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;
