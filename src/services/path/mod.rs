//! 路径服务
//!
//! 课程图谱的多跳遍历都在这里完成：完整分支及其层级、
//! 反向前驱分支、下一步课程与个性化推荐。存储层只提供
//! 单跳原语，遍历逻辑保持在服务内，便于单元测试。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Arc;

use crate::config::config::PathConfig;
use crate::error::{AppError, Result};
use crate::models::course::{Course, CourseRecord, Difficulty};
use crate::models::path::{LearningPath, LeveledCourse, PathNode, PrereqNode};
use crate::models::user::User;
use crate::storage::graph::CourseGraph;

/// 按难度分组的分支课程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyGroup {
    /// 难度等级
    pub difficulty: Difficulty,
    /// 本级课程（按名称排序）
    pub courses: Vec<LeveledCourse>,
}

/// 路径服务 trait
#[async_trait]
pub trait PathService: Send + Sync {
    /// 职业方向的完整课程分支
    ///
    /// 层级 1 为职业方向直接提供的课程，可经多条路径到达的
    /// 课程取最浅层级。结果按（层级，名称）排序。
    async fn branch_of_vocation(&self, vocation: &str) -> Result<Vec<LeveledCourse>>;

    /// 已完成课程的完整前驱分支
    ///
    /// 从根到任一已完成课程的路径上出现过的全部节点，去重
    /// 且包含已完成课程自身；职业方向排在前面，其后是按名称
    /// 排序的课程。
    async fn predecessor_branch(&self, completed: &[String]) -> Result<Vec<PathNode>>;

    /// 一组已完成课程的直接后继（剔除已完成的）
    async fn next_courses(&self, completed: &[String]) -> Result<Vec<Course>>;

    /// 用户的学习路径视图
    ///
    /// 无进度时推荐职业方向的首层课程，有进度时推荐
    /// 已完成课程的未完成后继。
    async fn recommendations_for(&self, user: &User) -> Result<LearningPath>;

    /// 职业方向分支的课程按难度分组（空组省略）
    async fn courses_by_difficulty_grouped(&self, vocation: &str) -> Result<Vec<DifficultyGroup>>;
}

/// 路径服务实现
pub struct PathServiceImpl {
    graph: Arc<dyn CourseGraph>,
    /// 分支遍历最大层数，0 表示无限制
    max_branch_depth: usize,
    /// 单次推荐数量上限，0 表示无限制
    max_recommendations: usize,
}

impl PathServiceImpl {
    pub fn new(graph: Arc<dyn CourseGraph>, config: &PathConfig) -> Self {
        Self {
            graph,
            max_branch_depth: config.max_branch_depth,
            max_recommendations: config.max_recommendations,
        }
    }
}

#[async_trait]
impl PathService for PathServiceImpl {
    async fn branch_of_vocation(&self, vocation: &str) -> Result<Vec<LeveledCourse>> {
        self.graph
            .get_vocation(vocation)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("职业方向不存在: {}", vocation)))?;

        let mut result: Vec<LeveledCourse> = Vec::new();
        let mut visited: BTreeSet<String> = BTreeSet::new();
        let mut frontier = self.graph.direct_courses(vocation).await?;
        let mut level = 1u32;

        while !frontier.is_empty()
            && (self.max_branch_depth == 0 || level as usize <= self.max_branch_depth)
        {
            let mut names: Vec<String> = Vec::new();
            for course in frontier {
                if visited.insert(course.name.clone()) {
                    names.push(course.name.clone());
                    result.push(LeveledCourse {
                        name: course.name,
                        difficulty: course.difficulty,
                        level,
                    });
                }
            }
            if names.is_empty() {
                break;
            }
            frontier = self.graph.successors_of(&names).await?;
            level += 1;
        }

        result.sort_by(|a, b| (a.level, &a.name).cmp(&(b.level, &b.name)));
        Ok(result)
    }

    async fn predecessor_branch(&self, completed: &[String]) -> Result<Vec<PathNode>> {
        let mut visited: BTreeSet<String> = BTreeSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut vocations: BTreeSet<String> = BTreeSet::new();
        let mut courses: BTreeMap<String, Difficulty> = BTreeMap::new();

        for name in completed {
            let course = self
                .graph
                .get_course(name)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("课程不存在: {}", name)))?;
            if visited.insert(course.name.clone()) {
                courses.insert(course.name.clone(), course.difficulty);
                queue.push_back(course.name);
            }
        }

        while let Some(current) = queue.pop_front() {
            for node in self.graph.predecessors_of(&current).await? {
                match node.difficulty {
                    None => {
                        vocations.insert(node.name);
                    }
                    Some(difficulty) => {
                        if visited.insert(node.name.clone()) {
                            courses.insert(node.name.clone(), difficulty);
                            queue.push_back(node.name);
                        }
                    }
                }
            }
        }

        let mut result: Vec<PathNode> = vocations
            .iter()
            .map(|name| PathNode::vocation(name))
            .collect();
        result.extend(
            courses
                .iter()
                .map(|(name, difficulty)| PathNode::course(name, *difficulty)),
        );
        Ok(result)
    }

    async fn next_courses(&self, completed: &[String]) -> Result<Vec<Course>> {
        if completed.is_empty() {
            return Ok(vec![]);
        }
        let successors = self.graph.successors_of(completed).await?;
        Ok(successors
            .into_iter()
            .filter(|c| !completed.contains(&c.name))
            .collect())
    }

    async fn recommendations_for(&self, user: &User) -> Result<LearningPath> {
        let route = self.branch_of_vocation(&user.vocation).await?;

        let mut next: Vec<LeveledCourse> = if !user.has_progress() {
            route.iter().filter(|c| c.level == 1).cloned().collect()
        } else {
            let level_by_name: BTreeMap<&str, u32> = route
                .iter()
                .map(|c| (c.name.as_str(), c.level))
                .collect();
            self.next_courses(&user.progress)
                .await?
                .into_iter()
                .map(|c| LeveledCourse {
                    level: level_by_name.get(c.name.as_str()).copied().unwrap_or(0),
                    name: c.name,
                    difficulty: c.difficulty,
                })
                .collect()
        };
        if self.max_recommendations > 0 {
            next.truncate(self.max_recommendations);
        }

        Ok(LearningPath {
            username: user.username.clone(),
            vocation: user.vocation.clone(),
            completed: user.progress.clone(),
            route,
            next,
        })
    }

    async fn courses_by_difficulty_grouped(&self, vocation: &str) -> Result<Vec<DifficultyGroup>> {
        let branch = self.branch_of_vocation(vocation).await?;

        let mut groups = Vec::new();
        for difficulty in Difficulty::ALL {
            let mut courses: Vec<LeveledCourse> = branch
                .iter()
                .filter(|c| c.difficulty == difficulty)
                .cloned()
                .collect();
            if !courses.is_empty() {
                courses.sort_by(|a, b| a.name.cmp(&b.name));
                groups.push(DifficultyGroup { difficulty, courses });
            }
        }
        Ok(groups)
    }
}

/// 从课程元数据文档构建前置课程森林
///
/// 根节点是目录内没有任何前置的课程；每门课程会出现在它的
/// 每个目录内前置课程之下（同一课程可能重复出现在多棵子树
/// 中）。目录外的前置条目（自由文本）不影响树形。遇到环时
/// 沿当前路径截断。
pub fn build_prerequisite_forest(records: &[CourseRecord]) -> Vec<PrereqNode> {
    let by_code: BTreeMap<&str, &CourseRecord> =
        records.iter().map(|r| (r.code.as_str(), r)).collect();

    let mut children: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for record in records {
        for prereq in &record.prerequisites {
            if by_code.contains_key(prereq.as_str()) {
                children
                    .entry(prereq.as_str())
                    .or_default()
                    .push(record.code.as_str());
            }
        }
    }

    fn build(
        code: &str,
        by_code: &BTreeMap<&str, &CourseRecord>,
        children: &BTreeMap<&str, Vec<&str>>,
        path: &mut Vec<String>,
    ) -> PrereqNode {
        let record = by_code[code];
        path.push(code.to_string());
        let mut unlocks: Vec<PrereqNode> = children
            .get(code)
            .map(|kids| {
                let kids: Vec<&str> = kids
                    .iter()
                    .filter(|kid| !path.iter().any(|seen| seen == *kid))
                    .copied()
                    .collect();
                kids.into_iter()
                    .map(|kid| build(kid, by_code, children, path))
                    .collect()
            })
            .unwrap_or_default();
        path.pop();

        unlocks.sort_by(|a, b| a.name.cmp(&b.name));
        PrereqNode {
            code: record.code.clone(),
            name: record.name.clone(),
            difficulty: record.difficulty,
            unlocks,
        }
    }

    let mut roots: Vec<PrereqNode> = records
        .iter()
        .filter(|r| {
            !r.prerequisites
                .iter()
                .any(|p| by_code.contains_key(p.as_str()))
        })
        .map(|r| build(&r.code, &by_code, &children, &mut Vec::new()))
        .collect();
    roots.sort_by(|a, b| a.name.cmp(&b.name));
    roots
}

/// 创建路径服务
pub fn create_path_service(
    graph: Arc<dyn CourseGraph>,
    config: &PathConfig,
) -> Box<dyn PathService> {
    Box::new(PathServiceImpl::new(graph, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::path::NodeKind;
    use crate::storage::memory::MemoryGraph;
    use chrono::NaiveDate;

    fn path_config() -> PathConfig {
        PathConfig {
            max_branch_depth: 16,
            max_recommendations: 10,
        }
    }

    /// 构建测试图谱：
    ///
    /// Desarrollo Web → HTML y CSS Básico → JavaScript Moderno → {React Avanzado, Node.js Backend}
    /// Desarrollo Web → Git Esencial
    async fn seeded_graph() -> Arc<MemoryGraph> {
        let graph = Arc::new(MemoryGraph::new());
        graph.upsert_vocation("Desarrollo Web", None).await.unwrap();
        graph
            .upsert_course("HTML y CSS Básico", Difficulty::Beginner)
            .await
            .unwrap();
        graph
            .upsert_course("Git Esencial", Difficulty::AllLevels)
            .await
            .unwrap();
        graph
            .upsert_course("JavaScript Moderno", Difficulty::Intermediate)
            .await
            .unwrap();
        graph
            .upsert_course("React Avanzado", Difficulty::Advanced)
            .await
            .unwrap();
        graph
            .upsert_course("Node.js Backend", Difficulty::Advanced)
            .await
            .unwrap();

        graph
            .link_offer("Desarrollo Web", "HTML y CSS Básico")
            .await
            .unwrap();
        graph
            .link_offer("Desarrollo Web", "Git Esencial")
            .await
            .unwrap();
        graph
            .link_precedence("HTML y CSS Básico", "JavaScript Moderno")
            .await
            .unwrap();
        graph
            .link_precedence("JavaScript Moderno", "React Avanzado")
            .await
            .unwrap();
        graph
            .link_precedence("JavaScript Moderno", "Node.js Backend")
            .await
            .unwrap();
        graph
    }

    fn service(graph: Arc<MemoryGraph>) -> PathServiceImpl {
        PathServiceImpl::new(graph, &path_config())
    }

    #[tokio::test]
    async fn test_branch_levels_and_order() {
        let service = service(seeded_graph().await);
        let branch = service.branch_of_vocation("Desarrollo Web").await.unwrap();

        let summary: Vec<(&str, u32)> = branch
            .iter()
            .map(|c| (c.name.as_str(), c.level))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Git Esencial", 1),
                ("HTML y CSS Básico", 1),
                ("JavaScript Moderno", 2),
                ("Node.js Backend", 3),
                ("React Avanzado", 3),
            ]
        );
    }

    #[tokio::test]
    async fn test_branch_unknown_vocation_is_not_found() {
        let service = service(seeded_graph().await);
        let err = service.branch_of_vocation("Astronomía").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_branch_diamond_keeps_shallowest_level() {
        let graph = Arc::new(MemoryGraph::new());
        graph.upsert_vocation("Datos", None).await.unwrap();
        for (name, diff) in [
            ("A", Difficulty::Beginner),
            ("B", Difficulty::Intermediate),
            ("C", Difficulty::Intermediate),
            ("D", Difficulty::Advanced),
        ] {
            graph.upsert_course(name, diff).await.unwrap();
        }
        graph.link_offer("Datos", "A").await.unwrap();
        graph.link_precedence("A", "B").await.unwrap();
        graph.link_precedence("A", "C").await.unwrap();
        graph.link_precedence("B", "D").await.unwrap();
        graph.link_precedence("C", "D").await.unwrap();
        // 环：不应导致遍历发散
        graph.link_precedence("D", "A").await.unwrap();

        let service = service(graph);
        let branch = service.branch_of_vocation("Datos").await.unwrap();

        let summary: Vec<(&str, u32)> = branch
            .iter()
            .map(|c| (c.name.as_str(), c.level))
            .collect();
        assert_eq!(summary, vec![("A", 1), ("B", 2), ("C", 2), ("D", 3)]);
    }

    #[tokio::test]
    async fn test_branch_respects_max_depth() {
        let graph = seeded_graph().await;
        let config = PathConfig {
            max_branch_depth: 2,
            max_recommendations: 10,
        };
        let service = PathServiceImpl::new(graph, &config);
        let branch = service.branch_of_vocation("Desarrollo Web").await.unwrap();
        assert!(branch.iter().all(|c| c.level <= 2));
        assert_eq!(branch.len(), 3);
    }

    #[tokio::test]
    async fn test_predecessor_branch_vocations_first() {
        let service = service(seeded_graph().await);
        let branch = service
            .predecessor_branch(&["React Avanzado".to_string()])
            .await
            .unwrap();

        let names: Vec<&str> = branch.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Desarrollo Web",
                "HTML y CSS Básico",
                "JavaScript Moderno",
                "React Avanzado",
            ]
        );
        assert_eq!(branch[0].kind, NodeKind::Vocation);
    }

    #[tokio::test]
    async fn test_predecessor_branch_of_first_course() {
        let service = service(seeded_graph().await);
        let branch = service
            .predecessor_branch(&["HTML y CSS Básico".to_string()])
            .await
            .unwrap();

        // 首门课程的分支只有职业方向和它自身
        assert_eq!(branch.len(), 2);
        assert_eq!(branch[0], PathNode::vocation("Desarrollo Web"));
        assert_eq!(branch[1].name, "HTML y CSS Básico");
    }

    #[tokio::test]
    async fn test_predecessor_branch_merges_completed_set() {
        let service = service(seeded_graph().await);
        let branch = service
            .predecessor_branch(&[
                "React Avanzado".to_string(),
                "Node.js Backend".to_string(),
            ])
            .await
            .unwrap();

        let names: Vec<&str> = branch.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Desarrollo Web",
                "HTML y CSS Básico",
                "JavaScript Moderno",
                "Node.js Backend",
                "React Avanzado",
            ]
        );
    }

    #[tokio::test]
    async fn test_next_courses_excludes_completed() {
        let service = service(seeded_graph().await);
        let next = service
            .next_courses(&["HTML y CSS Básico".to_string()])
            .await
            .unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].name, "JavaScript Moderno");

        let next = service
            .next_courses(&[
                "HTML y CSS Básico".to_string(),
                "JavaScript Moderno".to_string(),
            ])
            .await
            .unwrap();
        let names: Vec<&str> = next.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Node.js Backend", "React Avanzado"]);
    }

    #[tokio::test]
    async fn test_next_courses_empty_input() {
        let service = service(seeded_graph().await);
        let next = service.next_courses(&[]).await.unwrap();
        assert!(next.is_empty());
    }

    #[tokio::test]
    async fn test_recommendations_without_progress_suggest_first_level() {
        let service = service(seeded_graph().await);
        let user = User::new(
            "lucasg",
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            "Desarrollo Web",
        );

        let path = service.recommendations_for(&user).await.unwrap();
        let names: Vec<&str> = path.next.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Git Esencial", "HTML y CSS Básico"]);
        assert_eq!(path.route.len(), 5);
        assert!(path.completed.is_empty());
    }

    #[tokio::test]
    async fn test_recommendations_with_progress_suggest_successors() {
        let service = service(seeded_graph().await);
        let mut user = User::new(
            "anap",
            NaiveDate::from_ymd_opt(1985, 8, 22).unwrap(),
            "Desarrollo Web",
        );
        user.complete_course("HTML y CSS Básico");
        user.complete_course("Git Esencial");

        let path = service.recommendations_for(&user).await.unwrap();
        let names: Vec<&str> = path.next.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["JavaScript Moderno"]);
        assert_eq!(path.next[0].level, 2);
    }

    #[tokio::test]
    async fn test_recommendations_truncate_to_limit() {
        let graph = seeded_graph().await;
        let config = PathConfig {
            max_branch_depth: 16,
            max_recommendations: 1,
        };
        let service = PathServiceImpl::new(graph, &config);
        let user = User::new(
            "lucasg",
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            "Desarrollo Web",
        );

        let path = service.recommendations_for(&user).await.unwrap();
        assert_eq!(path.next.len(), 1);
    }

    #[tokio::test]
    async fn test_courses_grouped_by_difficulty() {
        let service = service(seeded_graph().await);
        let groups = service
            .courses_by_difficulty_grouped("Desarrollo Web")
            .await
            .unwrap();

        let summary: Vec<(Difficulty, usize)> = groups
            .iter()
            .map(|g| (g.difficulty, g.courses.len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Difficulty::Beginner, 1),
                (Difficulty::Intermediate, 1),
                (Difficulty::Advanced, 2),
                (Difficulty::AllLevels, 1),
            ]
        );
    }

    fn record(code: &str, name: &str, prereqs: &[&str]) -> CourseRecord {
        CourseRecord::new(code, name, "descripción", Difficulty::Beginner)
            .with_prerequisites(prereqs.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_prerequisite_forest_chains() {
        let records = vec![
            record("PYAI001", "Python para IA", &[]),
            record("MLBASICO002", "Machine Learning Básico", &["PYAI001"]),
            record("DLAVANZADO003", "Deep Learning Avanzado", &["MLBASICO002"]),
        ];

        let forest = build_prerequisite_forest(&records);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].code, "PYAI001");
        assert_eq!(forest[0].unlocks[0].code, "MLBASICO002");
        assert_eq!(forest[0].unlocks[0].unlocks[0].code, "DLAVANZADO003");
    }

    #[test]
    fn test_prerequisite_forest_external_prereq_is_root() {
        let records = vec![
            record("SQL001", "SQL desde Cero", &["Conocimientos básicos de informática"]),
            record("BI002", "Business Intelligence", &["SQL001"]),
        ];

        let forest = build_prerequisite_forest(&records);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].code, "SQL001");
    }

    #[test]
    fn test_prerequisite_forest_duplicates_under_each_prereq() {
        let records = vec![
            record("A1", "Algebra", &[]),
            record("E1", "Estadística", &[]),
            record("ML1", "Machine Learning", &["A1", "E1"]),
        ];

        let forest = build_prerequisite_forest(&records);
        assert_eq!(forest.len(), 2);
        assert!(forest.iter().all(|root| root.unlocks.len() == 1));
        assert!(forest.iter().all(|root| root.unlocks[0].code == "ML1"));
    }

    #[test]
    fn test_prerequisite_forest_cycle_is_truncated() {
        let records = vec![
            record("X1", "Curso X", &["Y1"]),
            record("Y1", "Curso Y", &["X1"]),
        ];

        // 互为前置时没有根，结果为空森林而不是死循环
        let forest = build_prerequisite_forest(&records);
        assert!(forest.is_empty());
    }

    #[test]
    fn test_prerequisite_forest_empty_catalog() {
        assert!(build_prerequisite_forest(&[]).is_empty());
    }
}
