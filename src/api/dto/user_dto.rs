//! 用户 DTO

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::dto::bibliography_dto::BibliographyResponse;
use crate::api::dto::vocation_dto::LeveledCourseResponse;
use crate::models::user::User;

/// 创建用户请求
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// 用户名
    pub username: String,
    /// 出生日期
    pub birth_date: NaiveDate,
    /// 职业方向
    pub vocation: String,
}

/// 修改用户请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateUserRequest {
    /// 新用户名
    pub username: Option<String>,
    /// 新出生日期
    pub birth_date: Option<NaiveDate>,
    /// 新职业方向
    pub vocation: Option<String>,
    /// 替换整份进度列表
    pub progress: Option<Vec<String>>,
}

/// 用户响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// 用户 ID
    pub id: String,
    /// 用户名
    pub username: String,
    /// 出生日期
    pub birth_date: NaiveDate,
    /// 年龄
    pub age: u32,
    /// 职业方向
    pub vocation: String,
    /// 已完成课程
    pub progress: Vec<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            birth_date: user.birth_date,
            age: user.age,
            vocation: user.vocation,
            progress: user.progress,
            created_at: user.created_at,
        }
    }
}

/// 用户列表响应
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    /// 用户列表
    pub users: Vec<UserResponse>,
    /// 总数
    pub total: usize,
}

/// 用户列表查询参数
#[derive(Debug, Deserialize, Default)]
pub struct ListUsersParams {
    /// 按职业方向过滤
    pub vocation: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// 完成课程请求
#[derive(Debug, Deserialize)]
pub struct CompleteCourseRequest {
    /// 课程名称
    pub course: String,
}

/// 学习路径响应
#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    /// 用户名
    pub username: String,
    /// 职业方向
    pub vocation: String,
    /// 已完成课程
    pub completed: Vec<String>,
    /// 完整分支
    pub route: Vec<LeveledCourseResponse>,
    /// 下一步推荐
    pub next: Vec<LeveledCourseResponse>,
    /// 已解锁书目
    pub unlocked_bibliographies: Vec<BibliographyResponse>,
}
