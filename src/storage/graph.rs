use async_trait::async_trait;
use surrealdb::{RecordId, Surreal, engine::any::Any};

use crate::error::{AppError, Result};
use crate::models::course::{Course, Difficulty};
use crate::models::path::PathNode;
use crate::models::taxonomy::Category;
use crate::models::vocation::Vocation;

/// 课程图谱访问 trait
///
/// 只暴露单跳读写原语；多跳遍历（分支、层级、推荐）在
/// 路径服务中基于这些原语组合完成，便于用内存实现做测试替身。
#[async_trait]
pub trait CourseGraph: Send + Sync {
    // === 节点写入 ===

    /// 按名称幂等写入职业方向
    async fn upsert_vocation(&self, name: &str, description: Option<&str>) -> Result<Vocation>;

    /// 按名称幂等写入课程
    async fn upsert_course(&self, name: &str, difficulty: Difficulty) -> Result<Course>;

    /// 按名称幂等写入分类
    async fn upsert_category(&self, name: &str, description: Option<&str>) -> Result<Category>;

    /// 重命名职业方向，目标不存在时返回 false
    async fn rename_vocation(&self, old_name: &str, new_name: &str) -> Result<bool>;

    /// 更新课程名称或难度，两者至少提供其一
    async fn update_course(
        &self,
        name: &str,
        new_name: Option<&str>,
        new_difficulty: Option<Difficulty>,
    ) -> Result<bool>;

    /// 删除职业方向及其关联边
    async fn delete_vocation(&self, name: &str) -> Result<bool>;

    /// 删除课程及其关联边
    async fn delete_course(&self, name: &str) -> Result<bool>;

    // === 节点读取 ===

    async fn get_vocation(&self, name: &str) -> Result<Option<Vocation>>;

    async fn get_course(&self, name: &str) -> Result<Option<Course>>;

    /// 列出全部职业方向（按名称排序）
    async fn list_vocations(&self) -> Result<Vec<Vocation>>;

    /// 列出全部课程（按名称排序）
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// 按难度列出课程
    async fn courses_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Course>>;

    // === 关系边 ===

    /// 职业方向 → 首门课程，幂等；返回是否新建了边
    async fn link_offer(&self, vocation: &str, course: &str) -> Result<bool>;

    /// 课程先后关系，幂等；返回是否新建了边
    async fn link_precedence(&self, predecessor: &str, successor: &str) -> Result<bool>;

    /// 职业方向 → 分类，幂等
    async fn link_category(&self, vocation: &str, category: &str) -> Result<bool>;

    /// 分类 → 课程，幂等
    async fn link_grouped(&self, category: &str, course: &str) -> Result<bool>;

    // === 单跳查询 ===

    /// 职业方向直接提供的课程
    async fn direct_courses(&self, vocation: &str) -> Result<Vec<Course>>;

    /// 一组课程的直接后继（去重）
    async fn successors_of(&self, names: &[String]) -> Result<Vec<Course>>;

    /// 课程的直接前驱（课程前驱 + 提供它的职业方向）
    async fn predecessors_of(&self, name: &str) -> Result<Vec<PathNode>>;

    /// 某职业方向某分类下的课程，可按难度过滤
    async fn courses_in_category(
        &self,
        vocation: &str,
        category: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Course>>;

    /// 职业方向下的分类列表
    async fn categories_of(&self, vocation: &str) -> Result<Vec<Category>>;
}

/// SurrealDB 图谱实现
///
/// 节点存在 `vocation` / `course` / `category` 表，关系边为
/// `offers` / `precedes` / `has_category` / `groups` 四张边表。
#[derive(Clone)]
pub struct SurrealCourseGraph {
    db: Surreal<Any>,
}

impl SurrealCourseGraph {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// 判断边是否已存在
    async fn edge_exists(&self, edge: &str, from: RecordId, to: RecordId) -> Result<bool> {
        let query = format!(
            "SELECT count() FROM {} WHERE in = $from AND out = $to GROUP ALL",
            edge
        );
        let result: Vec<serde_json::Value> = self
            .db
            .query(query)
            .bind(("from", from))
            .bind(("to", to))
            .await?
            .take(0)?;
        Ok(result
            .first()
            .and_then(|v| v.get("count"))
            .and_then(|c| c.as_u64())
            .unwrap_or(0)
            > 0)
    }

    /// 在两个已存在的节点之间建边，已存在时跳过
    async fn relate(&self, edge: &str, from: RecordId, to: RecordId) -> Result<bool> {
        if self.edge_exists(edge, from.clone(), to.clone()).await? {
            return Ok(false);
        }
        let query = format!("RELATE $from->{}->$to", edge);
        self.db
            .query(query)
            .bind(("from", from))
            .bind(("to", to))
            .await?;
        Ok(true)
    }

    async fn vocation_id(&self, name: &str) -> Result<RecordId> {
        let vocation = self
            .get_vocation(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("职业方向不存在: {}", name)))?;
        Ok(RecordId::from_table_key("vocation", vocation.id))
    }

    async fn course_id(&self, name: &str) -> Result<RecordId> {
        let course = self
            .get_course(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("课程不存在: {}", name)))?;
        Ok(RecordId::from_table_key("course", course.id))
    }

    async fn category_id(&self, name: &str) -> Result<RecordId> {
        let result: Vec<Category> = self
            .db
            .query("SELECT * FROM category WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        let category = result
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("分类不存在: {}", name)))?;
        Ok(RecordId::from_table_key("category", category.id))
    }
}

#[async_trait]
impl CourseGraph for SurrealCourseGraph {
    async fn upsert_vocation(&self, name: &str, description: Option<&str>) -> Result<Vocation> {
        if let Some(mut existing) = self.get_vocation(name).await? {
            if let Some(desc) = description {
                existing.description = Some(desc.to_string());
                self.db
                    .query("UPDATE vocation SET description = $description WHERE name = $name")
                    .bind(("description", desc.to_string()))
                    .bind(("name", name.to_string()))
                    .await?;
            }
            return Ok(existing);
        }

        let mut vocation = Vocation::new(name);
        if let Some(desc) = description {
            vocation = vocation.with_description(desc);
        }
        let created: Option<Vocation> = self
            .db
            .create(("vocation", vocation.id.as_str()))
            .content(vocation.clone())
            .await?;
        created.ok_or_else(|| AppError::Database(format!("Failed to create vocation: {}", name)))
    }

    async fn upsert_course(&self, name: &str, difficulty: Difficulty) -> Result<Course> {
        if let Some(mut existing) = self.get_course(name).await? {
            if existing.difficulty != difficulty {
                existing.difficulty = difficulty;
                self.db
                    .query("UPDATE course SET difficulty = $difficulty WHERE name = $name")
                    .bind(("difficulty", difficulty))
                    .bind(("name", name.to_string()))
                    .await?;
            }
            return Ok(existing);
        }

        let course = Course::new(name, difficulty);
        let created: Option<Course> = self
            .db
            .create(("course", course.id.as_str()))
            .content(course.clone())
            .await?;
        created.ok_or_else(|| AppError::Database(format!("Failed to create course: {}", name)))
    }

    async fn upsert_category(&self, name: &str, description: Option<&str>) -> Result<Category> {
        let existing: Vec<Category> = self
            .db
            .query("SELECT * FROM category WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        if let Some(category) = existing.into_iter().next() {
            return Ok(category);
        }

        let mut category = Category::new(name);
        if let Some(desc) = description {
            category = category.with_description(desc);
        }
        let created: Option<Category> = self
            .db
            .create(("category", category.id.as_str()))
            .content(category.clone())
            .await?;
        created.ok_or_else(|| AppError::Database(format!("Failed to create category: {}", name)))
    }

    async fn rename_vocation(&self, old_name: &str, new_name: &str) -> Result<bool> {
        if self.get_vocation(new_name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "职业方向已存在: {}",
                new_name
            )));
        }
        let updated: Vec<Vocation> = self
            .db
            .query("UPDATE vocation SET name = $new_name WHERE name = $old_name")
            .bind(("new_name", new_name.to_string()))
            .bind(("old_name", old_name.to_string()))
            .await?
            .take(0)?;
        Ok(!updated.is_empty())
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
        if let Some(target) = new_name {
            if target != name && self.get_course(target).await?.is_some() {
                return Err(AppError::Conflict(format!("课程已存在: {}", target)));
            }
        }

        let mut sets = Vec::new();
        if new_name.is_some() {
            sets.push("name = $new_name");
        }
        if new_difficulty.is_some() {
            sets.push("difficulty = $new_difficulty");
        }
        let query = format!(
            "UPDATE course SET {} WHERE name = $name",
            sets.join(", ")
        );

        let mut request = self.db.query(query).bind(("name", name.to_string()));
        if let Some(target) = new_name {
            request = request.bind(("new_name", target.to_string()));
        }
        if let Some(difficulty) = new_difficulty {
            request = request.bind(("new_difficulty", difficulty));
        }
        let updated: Vec<Course> = request.await?.take(0)?;
        Ok(!updated.is_empty())
    }

    async fn delete_vocation(&self, name: &str) -> Result<bool> {
        let query = "
            DELETE offers WHERE in.name = $name;
            DELETE has_category WHERE in.name = $name;
            DELETE FROM vocation WHERE name = $name RETURN BEFORE;
        ";
        let deleted: Vec<Vocation> = self
            .db
            .query(query)
            .bind(("name", name.to_string()))
            .await?
            .take(2)?;
        Ok(!deleted.is_empty())
    }

    async fn delete_course(&self, name: &str) -> Result<bool> {
        let query = "
            DELETE precedes WHERE in.name = $name OR out.name = $name;
            DELETE offers WHERE out.name = $name;
            DELETE groups WHERE out.name = $name;
            DELETE FROM course WHERE name = $name RETURN BEFORE;
        ";
        let deleted: Vec<Course> = self
            .db
            .query(query)
            .bind(("name", name.to_string()))
            .await?
            .take(3)?;
        Ok(!deleted.is_empty())
    }

    async fn get_vocation(&self, name: &str) -> Result<Option<Vocation>> {
        let result: Vec<Vocation> = self
            .db
            .query("SELECT * FROM vocation WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }

    async fn get_course(&self, name: &str) -> Result<Option<Course>> {
        let result: Vec<Course> = self
            .db
            .query("SELECT * FROM course WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }

    async fn list_vocations(&self) -> Result<Vec<Vocation>> {
        let result: Vec<Vocation> = self
            .db
            .query("SELECT * FROM vocation ORDER BY name ASC")
            .await?
            .take(0)?;
        Ok(result)
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        let result: Vec<Course> = self
            .db
            .query("SELECT * FROM course ORDER BY name ASC")
            .await?
            .take(0)?;
        Ok(result)
    }

    async fn courses_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Course>> {
        let result: Vec<Course> = self
            .db
            .query("SELECT * FROM course WHERE difficulty = $difficulty ORDER BY name ASC")
            .bind(("difficulty", difficulty))
            .await?
            .take(0)?;
        Ok(result)
    }

    async fn link_offer(&self, vocation: &str, course: &str) -> Result<bool> {
        let from = self.vocation_id(vocation).await?;
        let to = self.course_id(course).await?;
        self.relate("offers", from, to).await
    }

    async fn link_precedence(&self, predecessor: &str, successor: &str) -> Result<bool> {
        if predecessor == successor {
            return Err(AppError::Validation(
                "课程不能作为自身的前驱".to_string(),
            ));
        }
        let from = self.course_id(predecessor).await?;
        let to = self.course_id(successor).await?;
        self.relate("precedes", from, to).await
    }

    async fn link_category(&self, vocation: &str, category: &str) -> Result<bool> {
        let from = self.vocation_id(vocation).await?;
        let to = self.category_id(category).await?;
        self.relate("has_category", from, to).await
    }

    async fn link_grouped(&self, category: &str, course: &str) -> Result<bool> {
        let from = self.category_id(category).await?;
        let to = self.course_id(course).await?;
        self.relate("groups", from, to).await
    }

    async fn direct_courses(&self, vocation: &str) -> Result<Vec<Course>> {
        let mut result: Vec<Course> = self
            .db
            .query("SELECT VALUE out.* FROM offers WHERE in.name = $name")
            .bind(("name", vocation.to_string()))
            .await?
            .take(0)?;
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn successors_of(&self, names: &[String]) -> Result<Vec<Course>> {
        if names.is_empty() {
            return Ok(vec![]);
        }
        let mut result: Vec<Course> = self
            .db
            .query("SELECT VALUE out.* FROM precedes WHERE in.name IN $names")
            .bind(("names", names.to_vec()))
            .await?
            .take(0)?;
        result.sort_by(|a, b| a.name.cmp(&b.name));
        result.dedup_by(|a, b| a.name == b.name);
        Ok(result)
    }

    async fn predecessors_of(&self, name: &str) -> Result<Vec<PathNode>> {
        let courses: Vec<Course> = self
            .db
            .query("SELECT VALUE in.* FROM precedes WHERE out.name = $name")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        let vocations: Vec<Vocation> = self
            .db
            .query("SELECT VALUE in.* FROM offers WHERE out.name = $name")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;

        let mut nodes: Vec<PathNode> = vocations
            .iter()
            .map(|v| PathNode::vocation(&v.name))
            .chain(courses.iter().map(|c| PathNode::course(&c.name, c.difficulty)))
            .collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(nodes)
    }

    async fn courses_in_category(
        &self,
        vocation: &str,
        category: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Course>> {
        let linked: Vec<serde_json::Value> = self
            .db
            .query(
                "SELECT count() FROM has_category \
                 WHERE in.name = $vocation AND out.name = $category GROUP ALL",
            )
            .bind(("vocation", vocation.to_string()))
            .bind(("category", category.to_string()))
            .await?
            .take(0)?;
        let attached = linked
            .first()
            .and_then(|v| v.get("count"))
            .and_then(|c| c.as_u64())
            .unwrap_or(0)
            > 0;
        if !attached {
            return Err(AppError::NotFound(format!(
                "职业方向 {} 下没有分类 {}",
                vocation, category
            )));
        }

        let mut result: Vec<Course> = self
            .db
            .query("SELECT VALUE out.* FROM groups WHERE in.name = $category")
            .bind(("category", category.to_string()))
            .await?
            .take(0)?;
        if let Some(filter) = difficulty {
            result.retain(|c| c.difficulty == filter);
        }
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn categories_of(&self, vocation: &str) -> Result<Vec<Category>> {
        let mut result: Vec<Category> = self
            .db
            .query("SELECT VALUE out.* FROM has_category WHERE in.name = $name")
            .bind(("name", vocation.to_string()))
            .await?
            .take(0)?;
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }
}
