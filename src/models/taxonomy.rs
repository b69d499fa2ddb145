use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::course::Difficulty;

/// 分类节点
///
/// 职业方向下的课程分类（例如「机器学习」「自然语言处理」），
/// 通过 `has_category` 与 `groups` 边连接职业方向和课程。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// 分类唯一标识
    pub id: String,

    /// 分类名称
    pub name: String,

    /// 描述
    pub description: Option<String>,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// 创建新分类
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: None,
            created_at: Utc::now(),
        }
    }

    /// 设置描述
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// 分级课程条目（taxonomy 结构内）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyCourse {
    /// 课程名称
    pub name: String,
}

/// 难度分级
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyTier {
    /// 本级难度
    pub difficulty: Difficulty,
    /// 描述
    #[serde(default)]
    pub description: Option<String>,
    /// 本级课程
    #[serde(default)]
    pub courses: Vec<TaxonomyCourse>,
}

/// 分类结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyCategory {
    /// 分类名称
    pub name: String,
    /// 描述
    #[serde(default)]
    pub description: Option<String>,
    /// 难度分级列表
    #[serde(default)]
    pub tiers: Vec<TaxonomyTier>,
}

/// 职业方向完整分类结构
///
/// 描述 职业方向 → 分类 → 难度分级 → 课程 的一次性导入载荷。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomySpec {
    /// 职业方向名称
    pub vocation: String,
    /// 职业方向描述
    #[serde(default)]
    pub description: Option<String>,
    /// 分类列表
    #[serde(default)]
    pub categories: Vec<TaxonomyCategory>,
}
