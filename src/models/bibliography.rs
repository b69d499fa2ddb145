use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 参考书目
///
/// 课程完成后解锁的阅读材料，按标题与课程记录关联。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bibliography {
    /// 书目唯一标识
    pub id: String,

    /// 标题
    pub title: String,

    /// 作者
    pub author: String,

    /// 链接
    pub link: Option<String>,

    /// 描述
    pub description: Option<String>,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Bibliography {
    /// 创建新书目
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            link: None,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// 设置链接
    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    /// 设置描述
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
