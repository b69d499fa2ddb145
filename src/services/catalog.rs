//! 目录服务
//!
//! 维护图谱侧的职业方向、课程、分类节点及它们之间的关系边。

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::course::{Course, Difficulty};
use crate::models::taxonomy::Category;
use crate::models::vocation::Vocation;
use crate::storage::graph::CourseGraph;

/// 目录服务 trait
#[async_trait]
pub trait CatalogService: Send + Sync {
    // === 职业方向 ===

    /// 创建或更新职业方向
    async fn upsert_vocation(&self, name: &str, description: Option<&str>) -> Result<Vocation>;

    /// 获取职业方向
    async fn get_vocation(&self, name: &str) -> Result<Vocation>;

    /// 重命名职业方向
    async fn rename_vocation(&self, old_name: &str, new_name: &str) -> Result<()>;

    /// 删除职业方向
    async fn delete_vocation(&self, name: &str) -> Result<()>;

    /// 列出全部职业方向
    async fn list_vocations(&self) -> Result<Vec<Vocation>>;

    /// 职业方向直接提供的课程
    async fn direct_courses(&self, vocation: &str) -> Result<Vec<Course>>;

    // === 课程 ===

    /// 创建或更新课程
    async fn upsert_course(&self, name: &str, difficulty: Difficulty) -> Result<Course>;

    /// 获取课程
    async fn get_course(&self, name: &str) -> Result<Course>;

    /// 更新课程名称或难度
    async fn update_course(
        &self,
        name: &str,
        new_name: Option<&str>,
        new_difficulty: Option<Difficulty>,
    ) -> Result<()>;

    /// 删除课程
    async fn delete_course(&self, name: &str) -> Result<()>;

    /// 列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// 按难度列出课程
    async fn courses_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Course>>;

    // === 分类 ===

    /// 创建或更新分类
    async fn upsert_category(&self, name: &str, description: Option<&str>) -> Result<Category>;

    /// 职业方向下的分类
    async fn categories_of(&self, vocation: &str) -> Result<Vec<Category>>;

    /// 某职业方向某分类下的课程
    async fn courses_in_category(
        &self,
        vocation: &str,
        category: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Course>>;

    // === 关系边 ===

    /// 职业方向 → 首门课程
    async fn link_offer(&self, vocation: &str, course: &str) -> Result<bool>;

    /// 课程先后关系
    async fn link_precedence(&self, predecessor: &str, successor: &str) -> Result<bool>;

    /// 职业方向 → 分类
    async fn link_category(&self, vocation: &str, category: &str) -> Result<bool>;

    /// 分类 → 课程
    async fn link_grouped(&self, category: &str, course: &str) -> Result<bool>;
}

/// 目录服务实现
pub struct CatalogServiceImpl {
    graph: Arc<dyn CourseGraph>,
}

impl CatalogServiceImpl {
    pub fn new(graph: Arc<dyn CourseGraph>) -> Self {
        Self { graph }
    }

    fn require_name(name: &str, what: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(format!("{} 名称不能为空", what)));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn upsert_vocation(&self, name: &str, description: Option<&str>) -> Result<Vocation> {
        Self::require_name(name, "职业方向")?;
        self.graph.upsert_vocation(name, description).await
    }

    async fn get_vocation(&self, name: &str) -> Result<Vocation> {
        self.graph
            .get_vocation(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("职业方向不存在: {}", name)))
    }

    async fn rename_vocation(&self, old_name: &str, new_name: &str) -> Result<()> {
        Self::require_name(new_name, "职业方向")?;
        if self.graph.rename_vocation(old_name, new_name).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "职业方向不存在: {}",
                old_name
            )))
        }
    }

    async fn delete_vocation(&self, name: &str) -> Result<()> {
        if self.graph.delete_vocation(name).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("职业方向不存在: {}", name)))
        }
    }

    async fn list_vocations(&self) -> Result<Vec<Vocation>> {
        self.graph.list_vocations().await
    }

    async fn direct_courses(&self, vocation: &str) -> Result<Vec<Course>> {
        self.get_vocation(vocation).await?;
        self.graph.direct_courses(vocation).await
    }

    async fn upsert_course(&self, name: &str, difficulty: Difficulty) -> Result<Course> {
        Self::require_name(name, "课程")?;
        self.graph.upsert_course(name, difficulty).await
    }

    async fn get_course(&self, name: &str) -> Result<Course> {
        self.graph
            .get_course(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("课程不存在: {}", name)))
    }

    async fn update_course(
        &self,
        name: &str,
        new_name: Option<&str>,
        new_difficulty: Option<Difficulty>,
    ) -> Result<()> {
        if let Some(target) = new_name {
            Self::require_name(target, "课程")?;
        }
        if self
            .graph
            .update_course(name, new_name, new_difficulty)
            .await?
        {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("课程不存在: {}", name)))
        }
    }

    async fn delete_course(&self, name: &str) -> Result<()> {
        if self.graph.delete_course(name).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("课程不存在: {}", name)))
        }
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.graph.list_courses().await
    }

    async fn courses_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Course>> {
        self.graph.courses_by_difficulty(difficulty).await
    }

    async fn upsert_category(&self, name: &str, description: Option<&str>) -> Result<Category> {
        Self::require_name(name, "分类")?;
        self.graph.upsert_category(name, description).await
    }

    async fn categories_of(&self, vocation: &str) -> Result<Vec<Category>> {
        self.get_vocation(vocation).await?;
        self.graph.categories_of(vocation).await
    }

    async fn courses_in_category(
        &self,
        vocation: &str,
        category: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Course>> {
        self.graph
            .courses_in_category(vocation, category, difficulty)
            .await
    }

    async fn link_offer(&self, vocation: &str, course: &str) -> Result<bool> {
        self.graph.link_offer(vocation, course).await
    }

    async fn link_precedence(&self, predecessor: &str, successor: &str) -> Result<bool> {
        self.graph.link_precedence(predecessor, successor).await
    }

    async fn link_category(&self, vocation: &str, category: &str) -> Result<bool> {
        self.graph.link_category(vocation, category).await
    }

    async fn link_grouped(&self, category: &str, course: &str) -> Result<bool> {
        self.graph.link_grouped(category, course).await
    }
}

/// 创建目录服务
pub fn create_catalog_service(graph: Arc<dyn CourseGraph>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(graph))
}
