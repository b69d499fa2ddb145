//! 课程 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::course::Difficulty;
use crate::models::path::{NodeKind, PathNode};

/// 创建/更新课程请求
#[derive(Debug, Deserialize)]
pub struct UpsertCourseRequest {
    /// 课程名称
    pub name: String,
    /// 难度等级
    pub difficulty: Difficulty,
}

/// 修改课程请求，两个字段至少提供其一
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateCourseRequest {
    /// 新名称
    pub new_name: Option<String>,
    /// 新难度
    pub new_difficulty: Option<Difficulty>,
}

/// 课程响应
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    /// 课程 ID
    pub id: String,
    /// 名称
    pub name: String,
    /// 难度
    pub difficulty: Difficulty,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    /// 课程列表
    pub courses: Vec<CourseResponse>,
    /// 总数
    pub total: usize,
}

/// 课程列表查询参数
#[derive(Debug, Deserialize, Default)]
pub struct ListCoursesParams {
    /// 按难度过滤
    pub difficulty: Option<String>,
}

/// 课程先后关系请求
#[derive(Debug, Deserialize)]
pub struct LinkPrecedenceRequest {
    /// 后继课程名称
    pub successor: String,
}

/// 前驱分支节点响应
#[derive(Debug, Serialize)]
pub struct PathNodeResponse {
    /// 节点类型
    pub kind: NodeKind,
    /// 名称
    pub name: String,
    /// 难度（职业方向节点为空）
    pub difficulty: Option<Difficulty>,
}

impl From<PathNode> for PathNodeResponse {
    fn from(node: PathNode) -> Self {
        Self {
            kind: node.kind,
            name: node.name,
            difficulty: node.difficulty,
        }
    }
}

/// 前驱分支响应
#[derive(Debug, Serialize)]
pub struct PredecessorBranchResponse {
    /// 目标课程
    pub course: String,
    /// 前驱节点（职业方向在前）
    pub predecessors: Vec<PathNodeResponse>,
}

/// 下一步课程请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct NextCoursesRequest {
    /// 已完成课程名称
    pub completed: Vec<String>,
}
