use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 职业方向节点
///
/// 课程分支的根节点，通过 `offers` 边连接各分支的首门课程。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocation {
    /// 职业方向唯一标识
    pub id: String,

    /// 名称（图谱内唯一）
    pub name: String,

    /// 描述
    pub description: Option<String>,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Vocation {
    /// 创建新职业方向
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocation_new() {
        let vocation = Vocation::new("Ciencia de Datos").with_description("Dominio de datos");
        assert_eq!(vocation.name, "Ciencia de Datos");
        assert_eq!(vocation.description.as_deref(), Some("Dominio de datos"));
        assert!(!vocation.id.is_empty());
    }
}
