//! 导入服务
//!
//! 批量写入图谱：嵌套的课程分支载荷与
//! 职业方向 → 分类 → 难度分级 → 课程 的分类结构载荷。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::path::{BranchCourse, LoadReport};
use crate::models::taxonomy::TaxonomySpec;
use crate::storage::graph::CourseGraph;

/// 导入服务 trait
#[async_trait]
pub trait LoaderService: Send + Sync {
    /// 导入嵌套课程分支
    ///
    /// 职业方向不存在时自动创建；名称为空或缺少难度的条目
    /// 连同其子树一起跳过，计入报告。重复导入是幂等的。
    async fn load_branch(&self, vocation: &str, branches: &[BranchCourse]) -> Result<LoadReport>;

    /// 导入分类结构
    async fn load_taxonomy(&self, spec: &TaxonomySpec) -> Result<LoadReport>;
}

/// 导入时的父节点引用
enum ParentRef {
    Vocation(String),
    Course(String),
}

/// 导入服务实现
pub struct LoaderServiceImpl {
    graph: Arc<dyn CourseGraph>,
}

impl LoaderServiceImpl {
    pub fn new(graph: Arc<dyn CourseGraph>) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl LoaderService for LoaderServiceImpl {
    async fn load_branch(&self, vocation: &str, branches: &[BranchCourse]) -> Result<LoadReport> {
        self.graph.upsert_vocation(vocation, None).await?;

        let mut report = LoadReport::default();
        // 显式栈代替递归，载荷深度不受调用栈限制
        let mut stack: Vec<(ParentRef, &BranchCourse)> = branches
            .iter()
            .map(|b| (ParentRef::Vocation(vocation.to_string()), b))
            .collect();

        while let Some((parent, entry)) = stack.pop() {
            let name = entry.name.trim();
            let Some(difficulty) = entry.difficulty else {
                warn!(course = %entry.name, "分支条目缺少难度，连同子树跳过");
                report.entries_skipped += 1;
                continue;
            };
            if name.is_empty() {
                warn!("分支条目名称为空，连同子树跳过");
                report.entries_skipped += 1;
                continue;
            }

            self.graph.upsert_course(name, difficulty).await?;
            report.courses_loaded += 1;

            let created = match &parent {
                ParentRef::Vocation(vocation) => {
                    self.graph.link_offer(vocation, name).await?
                }
                ParentRef::Course(predecessor) => {
                    self.graph.link_precedence(predecessor, name).await?
                }
            };
            if created {
                report.links_created += 1;
            }

            for child in &entry.followed_by {
                stack.push((ParentRef::Course(name.to_string()), child));
            }
        }

        debug!(
            vocation = %vocation,
            courses = report.courses_loaded,
            links = report.links_created,
            skipped = report.entries_skipped,
            "课程分支导入完成"
        );
        Ok(report)
    }

    async fn load_taxonomy(&self, spec: &TaxonomySpec) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        self.graph
            .upsert_vocation(&spec.vocation, spec.description.as_deref())
            .await?;

        for category in &spec.categories {
            if category.name.trim().is_empty() {
                warn!("分类名称为空，跳过");
                report.entries_skipped += 1;
                continue;
            }
            let mut category_report = LoadReport::default();
            self.graph
                .upsert_category(&category.name, category.description.as_deref())
                .await?;
            if self
                .graph
                .link_category(&spec.vocation, &category.name)
                .await?
            {
                category_report.links_created += 1;
            }

            for tier in &category.tiers {
                for course in &tier.courses {
                    let name = course.name.trim();
                    if name.is_empty() {
                        warn!(category = %category.name, "课程名称为空，跳过");
                        category_report.entries_skipped += 1;
                        continue;
                    }
                    self.graph.upsert_course(name, tier.difficulty).await?;
                    category_report.courses_loaded += 1;
                    if self.graph.link_grouped(&category.name, name).await? {
                        category_report.links_created += 1;
                    }
                }
            }

            debug!(
                category = %category.name,
                courses = category_report.courses_loaded,
                "分类导入完成"
            );
            report.absorb(category_report);
        }

        debug!(
            vocation = %spec.vocation,
            courses = report.courses_loaded,
            links = report.links_created,
            skipped = report.entries_skipped,
            "分类结构导入完成"
        );
        Ok(report)
    }
}

/// 创建导入服务
pub fn create_loader_service(graph: Arc<dyn CourseGraph>) -> Box<dyn LoaderService> {
    Box::new(LoaderServiceImpl::new(graph))
}
