//! 课程元数据 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::course::{CourseRecord, Difficulty};
use crate::models::path::PrereqNode;
use crate::models::taxonomy::TaxonomySpec;

/// 创建/替换课程记录请求
#[derive(Debug, Deserialize)]
pub struct UpsertRecordRequest {
    /// 目录编号
    pub code: String,
    /// 课程名称
    pub name: String,
    /// 描述
    pub description: String,
    /// 难度
    pub difficulty: Difficulty,
    /// 主题列表
    #[serde(default)]
    pub topics: Vec<String>,
    /// 前置课程
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// 解锁的书目标题
    #[serde(default)]
    pub unlocks_bibliography: Option<String>,
}

impl UpsertRecordRequest {
    /// 转换成课程记录文档
    pub fn into_record(self) -> CourseRecord {
        let mut record =
            CourseRecord::new(&self.code, &self.name, &self.description, self.difficulty)
                .with_topics(self.topics)
                .with_prerequisites(self.prerequisites);
        record.unlocks_bibliography = self.unlocks_bibliography;
        record
    }
}

/// 课程记录响应
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    /// 文档 ID
    pub id: String,
    /// 目录编号
    pub code: String,
    /// 名称
    pub name: String,
    /// 描述
    pub description: String,
    /// 难度
    pub difficulty: Difficulty,
    /// 主题
    pub topics: Vec<String>,
    /// 前置课程
    pub prerequisites: Vec<String>,
    /// 解锁书目
    pub unlocks_bibliography: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl From<CourseRecord> for RecordResponse {
    fn from(record: CourseRecord) -> Self {
        Self {
            id: record.id,
            code: record.code,
            name: record.name,
            description: record.description,
            difficulty: record.difficulty,
            topics: record.topics,
            prerequisites: record.prerequisites,
            unlocks_bibliography: record.unlocks_bibliography,
            created_at: record.created_at,
        }
    }
}

/// 课程记录列表查询参数
#[derive(Debug, Deserialize, Default)]
pub struct ListRecordsParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// 课程记录列表响应
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    /// 记录列表
    pub records: Vec<RecordResponse>,
    /// 总数
    pub total: usize,
}

/// 前置课程森林响应
#[derive(Debug, Serialize)]
pub struct PrerequisiteTreeResponse {
    /// 根节点（目录内没有前置的课程）
    pub roots: Vec<PrereqNode>,
}

/// 分类结构导入请求
#[derive(Debug, Deserialize)]
pub struct LoadTaxonomyRequest {
    /// 分类结构
    #[serde(flatten)]
    pub spec: TaxonomySpec,
}
