//! 职业方向 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::course::Difficulty;
use crate::models::path::BranchCourse;

/// 创建/更新职业方向请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpsertVocationRequest {
    /// 名称
    pub name: String,
    /// 描述
    pub description: Option<String>,
}

/// 重命名职业方向请求
#[derive(Debug, Deserialize)]
pub struct RenameVocationRequest {
    /// 新名称
    pub new_name: String,
}

/// 职业方向响应
#[derive(Debug, Serialize)]
pub struct VocationResponse {
    /// 职业方向 ID
    pub id: String,
    /// 名称
    pub name: String,
    /// 描述
    pub description: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 职业方向列表响应
#[derive(Debug, Serialize)]
pub struct VocationListResponse {
    /// 职业方向列表
    pub vocations: Vec<VocationResponse>,
    /// 总数
    pub total: usize,
}

/// 关联首门课程请求
#[derive(Debug, Deserialize)]
pub struct LinkOfferRequest {
    /// 课程名称
    pub course: String,
}

/// 建边响应
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    /// 是否新建了边（false 表示边已存在）
    pub created: bool,
}

/// 关联分类请求
#[derive(Debug, Deserialize)]
pub struct LinkCategoryRequest {
    /// 分类名称
    pub category: String,
}

/// 删除响应
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// 被删除对象的名称
    pub name: String,
    /// 消息
    pub message: String,
}

/// 分支课程响应条目
#[derive(Debug, Serialize)]
pub struct LeveledCourseResponse {
    /// 课程名称
    pub name: String,
    /// 难度
    pub difficulty: Difficulty,
    /// 层级（1 为首层）
    pub level: u32,
}

/// 职业方向分支响应
#[derive(Debug, Serialize)]
pub struct BranchResponse {
    /// 职业方向
    pub vocation: String,
    /// 分支课程（按层级和名称排序）
    pub courses: Vec<LeveledCourseResponse>,
}

/// 分支课程按难度分组响应
#[derive(Debug, Serialize)]
pub struct GroupedCoursesResponse {
    /// 职业方向
    pub vocation: String,
    /// 分组列表（按难度从低到高，空组省略）
    pub groups: Vec<DifficultyGroupResponse>,
}

/// 单个难度分组
#[derive(Debug, Serialize)]
pub struct DifficultyGroupResponse {
    /// 难度
    pub difficulty: Difficulty,
    /// 本级课程（按名称排序）
    pub courses: Vec<LeveledCourseResponse>,
}

/// 分支导入请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoadBranchRequest {
    /// 嵌套课程分支
    pub branches: Vec<BranchCourse>,
}

/// 导入响应
#[derive(Debug, Serialize)]
pub struct LoadReportResponse {
    /// 写入的课程节点数
    pub courses_loaded: usize,
    /// 写入的关系边数
    pub links_created: usize,
    /// 跳过的条目数
    pub entries_skipped: usize,
}

/// 分类响应
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    /// 分类 ID
    pub id: String,
    /// 名称
    pub name: String,
    /// 描述
    pub description: Option<String>,
}

/// 分类列表响应
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// 职业方向
    pub vocation: String,
    /// 分类列表
    pub categories: Vec<CategoryResponse>,
}
