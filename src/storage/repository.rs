use async_trait::async_trait;
use std::marker::PhantomData;
use surrealdb::{Surreal, engine::any::Any};

use crate::error::Result;
use crate::models::bibliography::Bibliography;
use crate::models::course::CourseRecord;
use crate::models::user::User;

/// 仓储 trait
#[async_trait]
pub trait Repository<T: Clone + Send + Sync> {
    /// 创建实体
    async fn create(&self, entity: &T) -> Result<T>;

    /// 根据 ID 获取实体
    async fn get_by_id(&self, id: &str) -> Result<Option<T>>;

    /// 更新实体
    async fn update(&self, id: &str, entity: &T) -> Result<Option<T>>;

    /// 删除实体
    async fn delete(&self, id: &str) -> Result<bool>;

    /// 列出所有实体
    async fn list(&self, limit: usize, start: usize) -> Result<Vec<T>>;

    /// 统计数量
    async fn count(&self) -> Result<u64>;
}

/// 用户仓储实现
#[derive(Clone)]
pub struct UserRepository {
    db: Surreal<Any>,
    _marker: PhantomData<User>,
}

impl UserRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// 按用户名查找用户
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let result: Vec<User> = self
            .db
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username.to_string()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }

    /// 按职业方向列出用户
    pub async fn list_by_vocation(&self, vocation: &str) -> Result<Vec<User>> {
        let result: Vec<User> = self
            .db
            .query("SELECT * FROM user WHERE vocation = $vocation ORDER BY username ASC")
            .bind(("vocation", vocation.to_string()))
            .await?
            .take(0)?;
        Ok(result)
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn create(&self, user: &User) -> Result<User> {
        let created: Option<User> = self
            .db
            .create(("user", user.id.as_str()))
            .content(user.clone())
            .await?;

        created.ok_or_else(|| {
            crate::error::AppError::Database(format!("Failed to create user: {}", user.username))
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        let result: Option<User> = self.db.select(("user", id)).await?;
        Ok(result)
    }

    async fn update(&self, id: &str, user: &User) -> Result<Option<User>> {
        let updated: Option<User> = self
            .db
            .update(("user", id))
            .content(user.clone())
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result: Option<User> = self.db.delete(("user", id)).await?;
        Ok(result.is_some())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<User>> {
        let query = format!(
            "SELECT * FROM user ORDER BY username ASC LIMIT {} START {}",
            limit, start
        );
        let result: Vec<User> = self.db.query(query).await?.take(0)?;
        Ok(result)
    }

    async fn count(&self) -> Result<u64> {
        let result: Vec<serde_json::Value> = self
            .db
            .query("SELECT count() FROM user GROUP ALL")
            .await?
            .take(0)?;
        if let Some(count_val) = result.first().and_then(|v| v.get("count")) {
            Ok(count_val.as_u64().unwrap_or(0))
        } else {
            Ok(0)
        }
    }
}

/// 课程元数据仓储实现
#[derive(Clone)]
pub struct CourseRecordRepository {
    db: Surreal<Any>,
    _marker: PhantomData<CourseRecord>,
}

impl CourseRecordRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// 按目录编号查找
    pub async fn find_by_code(&self, code: &str) -> Result<Option<CourseRecord>> {
        let result: Vec<CourseRecord> = self
            .db
            .query("SELECT * FROM course_record WHERE code = $code LIMIT 1")
            .bind(("code", code.to_string()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }

    /// 按名称批量查找（顺序不保证）
    pub async fn find_by_names(&self, names: &[String]) -> Result<Vec<CourseRecord>> {
        if names.is_empty() {
            return Ok(vec![]);
        }
        let result: Vec<CourseRecord> = self
            .db
            .query("SELECT * FROM course_record WHERE name IN $names")
            .bind(("names", names.to_vec()))
            .await?
            .take(0)?;
        Ok(result)
    }
}

#[async_trait]
impl Repository<CourseRecord> for CourseRecordRepository {
    async fn create(&self, record: &CourseRecord) -> Result<CourseRecord> {
        let created: Option<CourseRecord> = self
            .db
            .create(("course_record", record.id.as_str()))
            .content(record.clone())
            .await?;

        created.ok_or_else(|| {
            crate::error::AppError::Database(format!(
                "Failed to create course record: {}",
                record.code
            ))
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<CourseRecord>> {
        let result: Option<CourseRecord> = self.db.select(("course_record", id)).await?;
        Ok(result)
    }

    async fn update(&self, id: &str, record: &CourseRecord) -> Result<Option<CourseRecord>> {
        let updated: Option<CourseRecord> = self
            .db
            .update(("course_record", id))
            .content(record.clone())
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result: Option<CourseRecord> = self.db.delete(("course_record", id)).await?;
        Ok(result.is_some())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<CourseRecord>> {
        let query = format!(
            "SELECT * FROM course_record ORDER BY code ASC LIMIT {} START {}",
            limit, start
        );
        let result: Vec<CourseRecord> = self.db.query(query).await?.take(0)?;
        Ok(result)
    }

    async fn count(&self) -> Result<u64> {
        let result: Vec<serde_json::Value> = self
            .db
            .query("SELECT count() FROM course_record GROUP ALL")
            .await?
            .take(0)?;
        if let Some(count_val) = result.first().and_then(|v| v.get("count")) {
            Ok(count_val.as_u64().unwrap_or(0))
        } else {
            Ok(0)
        }
    }
}

/// 书目仓储实现
#[derive(Clone)]
pub struct BibliographyRepository {
    db: Surreal<Any>,
    _marker: PhantomData<Bibliography>,
}

impl BibliographyRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// 按标题查找
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Bibliography>> {
        let result: Vec<Bibliography> = self
            .db
            .query("SELECT * FROM bibliography WHERE title = $title LIMIT 1")
            .bind(("title", title.to_string()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }

    /// 按标题批量查找
    pub async fn find_by_titles(&self, titles: &[String]) -> Result<Vec<Bibliography>> {
        if titles.is_empty() {
            return Ok(vec![]);
        }
        let result: Vec<Bibliography> = self
            .db
            .query("SELECT * FROM bibliography WHERE title IN $titles ORDER BY title ASC")
            .bind(("titles", titles.to_vec()))
            .await?
            .take(0)?;
        Ok(result)
    }
}

#[async_trait]
impl Repository<Bibliography> for BibliographyRepository {
    async fn create(&self, biblio: &Bibliography) -> Result<Bibliography> {
        let created: Option<Bibliography> = self
            .db
            .create(("bibliography", biblio.id.as_str()))
            .content(biblio.clone())
            .await?;

        created.ok_or_else(|| {
            crate::error::AppError::Database(format!(
                "Failed to create bibliography: {}",
                biblio.title
            ))
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Bibliography>> {
        let result: Option<Bibliography> = self.db.select(("bibliography", id)).await?;
        Ok(result)
    }

    async fn update(&self, id: &str, biblio: &Bibliography) -> Result<Option<Bibliography>> {
        let updated: Option<Bibliography> = self
            .db
            .update(("bibliography", id))
            .content(biblio.clone())
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result: Option<Bibliography> = self.db.delete(("bibliography", id)).await?;
        Ok(result.is_some())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<Bibliography>> {
        let query = format!(
            "SELECT * FROM bibliography ORDER BY title ASC LIMIT {} START {}",
            limit, start
        );
        let result: Vec<Bibliography> = self.db.query(query).await?.take(0)?;
        Ok(result)
    }

    async fn count(&self) -> Result<u64> {
        let result: Vec<serde_json::Value> = self
            .db
            .query("SELECT count() FROM bibliography GROUP ALL")
            .await?
            .take(0)?;
        if let Some(count_val) = result.first().and_then(|v| v.get("count")) {
            Ok(count_val.as_u64().unwrap_or(0))
        } else {
            Ok(0)
        }
    }
}
