//! 书目服务
//!
//! 维护参考书目文档，并根据用户已完成的课程解析解锁的书目。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::bibliography::Bibliography;
use crate::storage::repository::{BibliographyRepository, CourseRecordRepository, Repository};

/// 书目修改载荷
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BibliographyChanges {
    /// 新作者
    pub author: Option<String>,
    /// 新链接
    pub link: Option<String>,
    /// 新描述
    pub description: Option<String>,
}

impl BibliographyChanges {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.link.is_none() && self.description.is_none()
    }
}

/// 书目服务 trait
#[async_trait]
pub trait BibliographyService: Send + Sync {
    /// 创建书目，标题必须唯一
    async fn create(&self, biblio: Bibliography) -> Result<Bibliography>;

    /// 按标题获取
    async fn get_by_title(&self, title: &str) -> Result<Bibliography>;

    /// 按标题批量获取
    async fn find_by_titles(&self, titles: &[String]) -> Result<Vec<Bibliography>>;

    /// 修改书目，至少提供一个字段
    async fn update(&self, title: &str, changes: BibliographyChanges) -> Result<Bibliography>;

    /// 按标题删除
    async fn delete(&self, title: &str) -> Result<()>;

    /// 列出书目
    async fn list(&self, limit: usize, start: usize) -> Result<Vec<Bibliography>>;

    /// 已完成课程解锁的书目
    ///
    /// 查出完成课程对应的课程记录，取其 `unlocks_bibliography`
    /// 标题再解析成书目文档。
    async fn unlocked_for(&self, completed: &[String]) -> Result<Vec<Bibliography>>;
}

/// 书目服务实现
pub struct BibliographyServiceImpl {
    repository: Arc<BibliographyRepository>,
    records: Arc<CourseRecordRepository>,
}

impl BibliographyServiceImpl {
    pub fn new(
        repository: Arc<BibliographyRepository>,
        records: Arc<CourseRecordRepository>,
    ) -> Self {
        Self {
            repository,
            records,
        }
    }
}

#[async_trait]
impl BibliographyService for BibliographyServiceImpl {
    async fn create(&self, biblio: Bibliography) -> Result<Bibliography> {
        if biblio.title.trim().is_empty() {
            return Err(AppError::Validation("书目标题不能为空".to_string()));
        }
        if self.repository.find_by_title(&biblio.title).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "书目已存在: {}",
                biblio.title
            )));
        }
        self.repository.create(&biblio).await
    }

    async fn get_by_title(&self, title: &str) -> Result<Bibliography> {
        self.repository
            .find_by_title(title)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("书目不存在: {}", title)))
    }

    async fn find_by_titles(&self, titles: &[String]) -> Result<Vec<Bibliography>> {
        self.repository.find_by_titles(titles).await
    }

    async fn update(&self, title: &str, changes: BibliographyChanges) -> Result<Bibliography> {
        if changes.is_empty() {
            return Err(AppError::Validation("修改载荷不能为空".to_string()));
        }
        let mut biblio = self.get_by_title(title).await?;

        if let Some(author) = changes.author {
            if author.trim().is_empty() {
                return Err(AppError::Validation("作者不能为空".to_string()));
            }
            biblio.author = author;
        }
        if let Some(link) = changes.link {
            biblio.link = Some(link);
        }
        if let Some(description) = changes.description {
            biblio.description = Some(description);
        }

        self.repository
            .update(&biblio.id.clone(), &biblio)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("书目不存在: {}", title)))
    }

    async fn delete(&self, title: &str) -> Result<()> {
        let existing = self.get_by_title(title).await?;
        self.repository.delete(&existing.id).await?;
        Ok(())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<Bibliography>> {
        self.repository.list(limit, start).await
    }

    async fn unlocked_for(&self, completed: &[String]) -> Result<Vec<Bibliography>> {
        if completed.is_empty() {
            return Ok(vec![]);
        }
        let records = self.records.find_by_names(completed).await?;
        let titles: Vec<String> = records
            .into_iter()
            .filter_map(|r| r.unlocks_bibliography)
            .collect();
        self.find_by_titles(&titles).await
    }
}

/// 创建书目服务
pub fn create_bibliography_service(
    repository: Arc<BibliographyRepository>,
    records: Arc<CourseRecordRepository>,
) -> Box<dyn BibliographyService> {
    Box::new(BibliographyServiceImpl::new(repository, records))
}
