//! 核心数据模型模块
//!
//! 定义 Pathways 的核心数据结构：Vocation, Course, User, Bibliography，
//! 以及路径计算产物：LeveledCourse, PathNode, PrereqNode 等。

pub mod bibliography;
pub mod course;
pub mod path;
pub mod taxonomy;
pub mod user;
pub mod vocation;

pub use bibliography::*;
pub use course::*;
pub use path::*;
pub use taxonomy::*;
pub use user::*;
pub use vocation::*;
