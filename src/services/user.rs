//! 用户服务
//!
//! 用户档案的 CRUD 与学习进度维护。职业方向必须已存在于
//! 图谱中，否则创建和修改都会被拒绝。

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::user::User;
use crate::storage::graph::CourseGraph;
use crate::storage::repository::{Repository, UserRepository};

/// 用户修改载荷
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserChanges {
    /// 新用户名
    pub username: Option<String>,
    /// 新出生日期
    pub birth_date: Option<NaiveDate>,
    /// 新职业方向
    pub vocation: Option<String>,
    /// 替换整份进度列表，每门课程都必须存在于图谱中
    pub progress: Option<Vec<String>>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.birth_date.is_none()
            && self.vocation.is_none()
            && self.progress.is_none()
    }
}

/// 用户服务 trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// 创建用户
    async fn create(&self, username: &str, birth_date: NaiveDate, vocation: &str) -> Result<User>;

    /// 按 ID 获取用户
    async fn get_by_id(&self, id: &str) -> Result<User>;

    /// 按用户名获取用户
    async fn get_by_username(&self, username: &str) -> Result<User>;

    /// 修改用户
    async fn update(&self, username: &str, changes: UserChanges) -> Result<User>;

    /// 删除用户
    async fn delete(&self, username: &str) -> Result<()>;

    /// 列出用户
    async fn list(&self, limit: usize, start: usize) -> Result<Vec<User>>;

    /// 按职业方向列出用户
    async fn list_by_vocation(&self, vocation: &str) -> Result<Vec<User>>;

    /// 标记课程完成（幂等）
    async fn complete_course(&self, username: &str, course: &str) -> Result<User>;
}

/// 用户服务实现
pub struct UserServiceImpl {
    repository: Arc<UserRepository>,
    graph: Arc<dyn CourseGraph>,
}

impl UserServiceImpl {
    pub fn new(repository: Arc<UserRepository>, graph: Arc<dyn CourseGraph>) -> Self {
        Self { repository, graph }
    }

    /// 职业方向必须已存在于图谱中
    async fn require_vocation(&self, vocation: &str) -> Result<()> {
        if self.graph.get_vocation(vocation).await?.is_none() {
            return Err(AppError::Validation(format!(
                "职业方向不存在: {}",
                vocation
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create(&self, username: &str, birth_date: NaiveDate, vocation: &str) -> Result<User> {
        if username.trim().is_empty() {
            return Err(AppError::Validation("用户名不能为空".to_string()));
        }
        if self.repository.find_by_username(username).await?.is_some() {
            return Err(AppError::Conflict(format!("用户名已存在: {}", username)));
        }
        self.require_vocation(vocation).await?;

        let user = User::new(username, birth_date, vocation);
        let created = self.repository.create(&user).await?;
        info!(username = %created.username, vocation = %created.vocation, "用户已创建");
        Ok(created)
    }

    async fn get_by_id(&self, id: &str) -> Result<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("用户不存在: {}", id)))
    }

    async fn get_by_username(&self, username: &str) -> Result<User> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("用户不存在: {}", username)))
    }

    async fn update(&self, username: &str, changes: UserChanges) -> Result<User> {
        if changes.is_empty() {
            return Err(AppError::Validation("修改载荷不能为空".to_string()));
        }
        let mut user = self.get_by_username(username).await?;

        if let Some(new_username) = &changes.username {
            if new_username.trim().is_empty() {
                return Err(AppError::Validation("用户名不能为空".to_string()));
            }
            if new_username != username
                && self
                    .repository
                    .find_by_username(new_username)
                    .await?
                    .is_some()
            {
                return Err(AppError::Conflict(format!(
                    "用户名已存在: {}",
                    new_username
                )));
            }
            user.username = new_username.clone();
        }
        if let Some(birth_date) = changes.birth_date {
            user.set_birth_date(birth_date);
        }
        if let Some(vocation) = &changes.vocation {
            self.require_vocation(vocation).await?;
            user.vocation = vocation.clone();
        }
        if let Some(progress) = changes.progress {
            let mut validated: Vec<String> = Vec::new();
            for course in progress {
                if self.graph.get_course(&course).await?.is_none() {
                    return Err(AppError::Validation(format!("课程不存在: {}", course)));
                }
                if !validated.contains(&course) {
                    validated.push(course);
                }
            }
            user.progress = validated;
        }
        user.touch();

        self.repository
            .update(&user.id.clone(), &user)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("用户不存在: {}", username)))
    }

    async fn delete(&self, username: &str) -> Result<()> {
        let user = self.get_by_username(username).await?;
        self.repository.delete(&user.id).await?;
        info!(username = %username, "用户已删除");
        Ok(())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<User>> {
        self.repository.list(limit, start).await
    }

    async fn list_by_vocation(&self, vocation: &str) -> Result<Vec<User>> {
        self.repository.list_by_vocation(vocation).await
    }

    async fn complete_course(&self, username: &str, course: &str) -> Result<User> {
        let mut user = self.get_by_username(username).await?;
        self.graph
            .get_course(course)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("课程不存在: {}", course)))?;

        if !user.complete_course(course) {
            // 已完成过，保持幂等
            return Ok(user);
        }
        self.repository
            .update(&user.id.clone(), &user)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("用户不存在: {}", username)))
    }
}

/// 创建用户服务
pub fn create_user_service(
    repository: Arc<UserRepository>,
    graph: Arc<dyn CourseGraph>,
) -> Box<dyn UserService> {
    Box::new(UserServiceImpl::new(repository, graph))
}
