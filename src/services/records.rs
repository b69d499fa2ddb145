//! 课程元数据服务
//!
//! 维护文档侧的课程记录（目录编号、描述、前置课程、解锁
//! 书目），并由全量目录构建前置课程森林。

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::course::CourseRecord;
use crate::models::path::PrereqNode;
use crate::services::path::build_prerequisite_forest;
use crate::storage::repository::{CourseRecordRepository, Repository};

/// 课程元数据服务 trait
#[async_trait]
pub trait CourseRecordService: Send + Sync {
    /// 创建课程记录，目录编号必须唯一
    async fn create(&self, record: CourseRecord) -> Result<CourseRecord>;

    /// 按目录编号获取
    async fn get_by_code(&self, code: &str) -> Result<CourseRecord>;

    /// 按名称批量获取
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<CourseRecord>>;

    /// 按目录编号整体替换
    async fn update(&self, code: &str, record: CourseRecord) -> Result<CourseRecord>;

    /// 按目录编号删除
    async fn delete(&self, code: &str) -> Result<()>;

    /// 列出课程记录
    async fn list(&self, limit: usize, start: usize) -> Result<Vec<CourseRecord>>;

    /// 全量目录的前置课程森林
    async fn prerequisite_tree(&self) -> Result<Vec<PrereqNode>>;
}

/// 课程元数据服务实现
pub struct CourseRecordServiceImpl {
    repository: Arc<CourseRecordRepository>,
}

impl CourseRecordServiceImpl {
    pub fn new(repository: Arc<CourseRecordRepository>) -> Self {
        Self { repository }
    }

    async fn all_records(&self) -> Result<Vec<CourseRecord>> {
        let total = self.repository.count().await? as usize;
        if total == 0 {
            return Ok(vec![]);
        }
        self.repository.list(total, 0).await
    }
}

#[async_trait]
impl CourseRecordService for CourseRecordServiceImpl {
    async fn create(&self, record: CourseRecord) -> Result<CourseRecord> {
        if record.code.trim().is_empty() {
            return Err(AppError::Validation("目录编号不能为空".to_string()));
        }
        if self.repository.find_by_code(&record.code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "目录编号已存在: {}",
                record.code
            )));
        }
        self.repository.create(&record).await
    }

    async fn get_by_code(&self, code: &str) -> Result<CourseRecord> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("课程记录不存在: {}", code)))
    }

    async fn find_by_names(&self, names: &[String]) -> Result<Vec<CourseRecord>> {
        self.repository.find_by_names(names).await
    }

    async fn update(&self, code: &str, mut record: CourseRecord) -> Result<CourseRecord> {
        let existing = self.get_by_code(code).await?;
        if record.code != code && self.repository.find_by_code(&record.code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "目录编号已存在: {}",
                record.code
            )));
        }
        record.id = existing.id.clone();
        record.created_at = existing.created_at;
        self.repository
            .update(&existing.id, &record)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("课程记录不存在: {}", code)))
    }

    async fn delete(&self, code: &str) -> Result<()> {
        let existing = self.get_by_code(code).await?;
        self.repository.delete(&existing.id).await?;
        Ok(())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<CourseRecord>> {
        self.repository.list(limit, start).await
    }

    async fn prerequisite_tree(&self) -> Result<Vec<PrereqNode>> {
        let records = self.all_records().await?;
        Ok(build_prerequisite_forest(&records))
    }
}

/// 创建课程元数据服务
pub fn create_course_record_service(
    repository: Arc<CourseRecordRepository>,
) -> Box<dyn CourseRecordService> {
    Box::new(CourseRecordServiceImpl::new(repository))
}
