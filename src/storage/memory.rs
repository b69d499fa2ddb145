//! 内存图谱实现
//!
//! 仅用于测试：以 BTreeMap/BTreeSet 模拟节点表与边表，
//! 语义与 SurrealDB 实现保持一致。

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::error::{AppError, Result};
use crate::models::course::{Course, Difficulty};
use crate::models::path::PathNode;
use crate::models::taxonomy::Category;
use crate::models::vocation::Vocation;
use crate::storage::graph::CourseGraph;

#[derive(Default)]
struct Inner {
    vocations: BTreeMap<String, Vocation>,
    courses: BTreeMap<String, Course>,
    categories: BTreeMap<String, Category>,
    offers: BTreeSet<(String, String)>,
    precedes: BTreeSet<(String, String)>,
    has_category: BTreeSet<(String, String)>,
    groups: BTreeSet<(String, String)>,
}

/// 内存图谱
#[derive(Default)]
pub struct MemoryGraph {
    inner: Mutex<Inner>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseGraph for MemoryGraph {
    async fn upsert_vocation(&self, name: &str, description: Option<&str>) -> Result<Vocation> {
        let mut inner = self.inner.lock().unwrap();
        let vocation = inner
            .vocations
            .entry(name.to_string())
            .or_insert_with(|| Vocation::new(name));
        if let Some(desc) = description {
            vocation.description = Some(desc.to_string());
        }
        Ok(vocation.clone())
    }

    async fn upsert_course(&self, name: &str, difficulty: Difficulty) -> Result<Course> {
        let mut inner = self.inner.lock().unwrap();
        let course = inner
            .courses
            .entry(name.to_string())
            .or_insert_with(|| Course::new(name, difficulty));
        course.difficulty = difficulty;
        Ok(course.clone())
    }

    async fn upsert_category(&self, name: &str, description: Option<&str>) -> Result<Category> {
        let mut inner = self.inner.lock().unwrap();
        let category = inner
            .categories
            .entry(name.to_string())
            .or_insert_with(|| Category::new(name));
        if let Some(desc) = description {
            category.description = Some(desc.to_string());
        }
        Ok(category.clone())
    }

    async fn rename_vocation(&self, old_name: &str, new_name: &str) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        if inner.vocations.contains_key(new_name) {
            return Err(AppError::Conflict(format!(
                "职业方向已存在: {}",
                new_name
            )));
        }
        let Some(mut vocation) = inner.vocations.remove(old_name) else {
            return Ok(false);
        };
        vocation.name = new_name.to_string();
        inner.vocations.insert(new_name.to_string(), vocation);
        inner.offers = inner
            .offers
            .iter()
            .map(|(from, to)| {
                let from = if from == old_name { new_name } else { from };
                (from.to_string(), to.clone())
            })
            .collect();
        inner.has_category = inner
            .has_category
            .iter()
            .map(|(from, to)| {
                let from = if from == old_name { new_name } else { from };
                (from.to_string(), to.clone())
            })
            .collect();
        Ok(true)
    }

    async fn update_course(
        &self,
        name: &str,
        new_name: Option<&str>,
        new_difficulty: Option<Difficulty>,
    ) -> Result<bool> {
        if new_name.is_none() && new_difficulty.is_none() {
            return Err(AppError::Validation(
                "必须提供新名称或新难度之一".to_string(),
            ));
        }
        let mut inner = self.inner.lock().unwrap();
        let Some(mut course) = inner.courses.remove(name) else {
            return Ok(false);
        };
        if let Some(difficulty) = new_difficulty {
            course.difficulty = difficulty;
        }
        let final_name = new_name.unwrap_or(name).to_string();
        course.name = final_name.clone();
        inner.courses.insert(final_name.clone(), course);

        let rename = |pair: &(String, String)| {
            let from = if pair.0 == name { final_name.clone() } else { pair.0.clone() };
            let to = if pair.1 == name { final_name.clone() } else { pair.1.clone() };
            (from, to)
        };
        inner.precedes = inner.precedes.iter().map(rename).collect();
        inner.offers = inner
            .offers
            .iter()
            .map(|(from, to)| {
                let to = if to == name { final_name.clone() } else { to.clone() };
                (from.clone(), to)
            })
            .collect();
        inner.groups = inner
            .groups
            .iter()
            .map(|(from, to)| {
                let to = if to == name { final_name.clone() } else { to.clone() };
                (from.clone(), to)
            })
            .collect();
        Ok(true)
    }

    async fn delete_vocation(&self, name: &str) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let removed = inner.vocations.remove(name).is_some();
        inner.offers.retain(|(from, _)| from != name);
        inner.has_category.retain(|(from, _)| from != name);
        Ok(removed)
    }

    async fn delete_course(&self, name: &str) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let removed = inner.courses.remove(name).is_some();
        inner.precedes.retain(|(from, to)| from != name && to != name);
        inner.offers.retain(|(_, to)| to != name);
        inner.groups.retain(|(_, to)| to != name);
        Ok(removed)
    }

    async fn get_vocation(&self, name: &str) -> Result<Option<Vocation>> {
        Ok(self.inner.lock().unwrap().vocations.get(name).cloned())
    }

    async fn get_course(&self, name: &str) -> Result<Option<Course>> {
        Ok(self.inner.lock().unwrap().courses.get(name).cloned())
    }

    async fn list_vocations(&self) -> Result<Vec<Vocation>> {
        Ok(self.inner.lock().unwrap().vocations.values().cloned().collect())
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.inner.lock().unwrap().courses.values().cloned().collect())
    }

    async fn courses_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Course>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .courses
            .values()
            .filter(|c| c.difficulty == difficulty)
            .cloned()
            .collect())
    }

    async fn link_offer(&self, vocation: &str, course: &str) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.vocations.contains_key(vocation) {
            return Err(AppError::NotFound(format!("职业方向不存在: {}", vocation)));
        }
        if !inner.courses.contains_key(course) {
            return Err(AppError::NotFound(format!("课程不存在: {}", course)));
        }
        Ok(inner.offers.insert((vocation.to_string(), course.to_string())))
    }

    async fn link_precedence(&self, predecessor: &str, successor: &str) -> Result<bool> {
        if predecessor == successor {
            return Err(AppError::Validation(
                "课程不能作为自身的前驱".to_string(),
            ));
        }
        let mut inner = self.inner.lock().unwrap();
        for name in [predecessor, successor] {
            if !inner.courses.contains_key(name) {
                return Err(AppError::NotFound(format!("课程不存在: {}", name)));
            }
        }
        Ok(inner
            .precedes
            .insert((predecessor.to_string(), successor.to_string())))
    }

    async fn link_category(&self, vocation: &str, category: &str) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.vocations.contains_key(vocation) {
            return Err(AppError::NotFound(format!("职业方向不存在: {}", vocation)));
        }
        if !inner.categories.contains_key(category) {
            return Err(AppError::NotFound(format!("分类不存在: {}", category)));
        }
        Ok(inner
            .has_category
            .insert((vocation.to_string(), category.to_string())))
    }

    async fn link_grouped(&self, category: &str, course: &str) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.categories.contains_key(category) {
            return Err(AppError::NotFound(format!("分类不存在: {}", category)));
        }
        if !inner.courses.contains_key(course) {
            return Err(AppError::NotFound(format!("课程不存在: {}", course)));
        }
        Ok(inner.groups.insert((category.to_string(), course.to_string())))
    }

    async fn direct_courses(&self, vocation: &str) -> Result<Vec<Course>> {
        let inner = self.inner.lock().unwrap();
        let mut result: Vec<Course> = inner
            .offers
            .iter()
            .filter(|(from, _)| from == vocation)
            .filter_map(|(_, to)| inner.courses.get(to).cloned())
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn successors_of(&self, names: &[String]) -> Result<Vec<Course>> {
        let inner = self.inner.lock().unwrap();
        let mut result: Vec<Course> = inner
            .precedes
            .iter()
            .filter(|(from, _)| names.contains(from))
            .filter_map(|(_, to)| inner.courses.get(to).cloned())
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        result.dedup_by(|a, b| a.name == b.name);
        Ok(result)
    }

    async fn predecessors_of(&self, name: &str) -> Result<Vec<PathNode>> {
        let inner = self.inner.lock().unwrap();
        let mut nodes: Vec<PathNode> = inner
            .offers
            .iter()
            .filter(|(_, to)| to == name)
            .map(|(from, _)| PathNode::vocation(from))
            .collect();
        nodes.extend(
            inner
                .precedes
                .iter()
                .filter(|(_, to)| to == name)
                .filter_map(|(from, _)| {
                    inner
                        .courses
                        .get(from)
                        .map(|c| PathNode::course(&c.name, c.difficulty))
                }),
        );
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(nodes)
    }

    async fn courses_in_category(
        &self,
        vocation: &str,
        category: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Course>> {
        let inner = self.inner.lock().unwrap();
        if !inner
            .has_category
            .contains(&(vocation.to_string(), category.to_string()))
        {
            return Err(AppError::NotFound(format!(
                "职业方向 {} 下没有分类 {}",
                vocation, category
            )));
        }
        let mut result: Vec<Course> = inner
            .groups
            .iter()
            .filter(|(from, _)| from == category)
            .filter_map(|(_, to)| inner.courses.get(to).cloned())
            .filter(|c| difficulty.map_or(true, |d| c.difficulty == d))
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn categories_of(&self, vocation: &str) -> Result<Vec<Category>> {
        let inner = self.inner.lock().unwrap();
        let mut result: Vec<Category> = inner
            .has_category
            .iter()
            .filter(|(from, _)| from == vocation)
            .filter_map(|(_, to)| inner.categories.get(to).cloned())
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }
}
