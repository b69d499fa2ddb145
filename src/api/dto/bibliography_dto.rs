//! 书目 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::bibliography::Bibliography;

/// 创建书目请求
#[derive(Debug, Deserialize)]
pub struct CreateBibliographyRequest {
    /// 标题
    pub title: String,
    /// 作者
    pub author: String,
    /// 链接
    #[serde(default)]
    pub link: Option<String>,
    /// 描述
    #[serde(default)]
    pub description: Option<String>,
}

/// 按标题批量检索请求
#[derive(Debug, Deserialize)]
pub struct SearchBibliographiesRequest {
    /// 标题列表
    pub titles: Vec<String>,
}

/// 修改书目请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateBibliographyRequest {
    /// 新作者
    pub author: Option<String>,
    /// 新链接
    pub link: Option<String>,
    /// 新描述
    pub description: Option<String>,
}

/// 书目响应
#[derive(Debug, Serialize)]
pub struct BibliographyResponse {
    /// 书目 ID
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

impl From<Bibliography> for BibliographyResponse {
    fn from(biblio: Bibliography) -> Self {
        Self {
            id: biblio.id,
            title: biblio.title,
            author: biblio.author,
            link: biblio.link,
            description: biblio.description,
            created_at: biblio.created_at,
        }
    }
}

/// 书目列表响应
#[derive(Debug, Serialize)]
pub struct BibliographyListResponse {
    /// 书目列表
    pub bibliographies: Vec<BibliographyResponse>,
    /// 总数
    pub total: usize,
}

/// 书目列表查询参数
#[derive(Debug, Deserialize, Default)]
pub struct ListBibliographiesParams {
    /// 按标题批量查询（逗号分隔）
    pub titles: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}
