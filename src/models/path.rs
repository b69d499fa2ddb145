use serde::{Deserialize, Serialize};

use crate::models::course::Difficulty;

/// 分支导入树节点
///
/// 描述 职业方向 → 首门课程 → 后继课程 的嵌套导入载荷，
/// `followed_by` 为该课程的直接后继列表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchCourse {
    /// 课程名称
    pub name: String,

    /// 难度等级
    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    /// 直接后继课程
    #[serde(default)]
    pub followed_by: Vec<BranchCourse>,
}

/// 导入结果统计
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// 写入的课程节点数
    pub courses_loaded: usize,

    /// 写入的先后关系边数
    pub links_created: usize,

    /// 因字段缺失被跳过的条目数
    pub entries_skipped: usize,
}

impl LoadReport {
    /// 合并另一份统计
    pub fn absorb(&mut self, other: LoadReport) {
        self.courses_loaded += other.courses_loaded;
        self.links_created += other.links_created;
        self.entries_skipped += other.entries_skipped;
    }
}

/// 带层级的课程
///
/// 层级从 1 起算：职业方向直接提供的课程层级为 1，
/// 其后继依次递增。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveledCourse {
    /// 课程名称
    pub name: String,

    /// 难度等级
    pub difficulty: Difficulty,

    /// 距离职业方向的层级
    pub level: u32,
}

/// 路径节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// 职业方向
    Vocation,
    /// 课程
    Course,
}

/// 前驱分支上的节点
///
/// 反向遍历时既可能到达课程，也可能到达职业方向根节点。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    /// 节点类型
    pub kind: NodeKind,

    /// 节点名称
    pub name: String,

    /// 难度（职业方向节点为空）
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl PathNode {
    pub fn vocation(name: &str) -> Self {
        Self {
            kind: NodeKind::Vocation,
            name: name.to_string(),
            difficulty: None,
        }
    }

    pub fn course(name: &str, difficulty: Difficulty) -> Self {
        Self {
            kind: NodeKind::Course,
            name: name.to_string(),
            difficulty: Some(difficulty),
        }
    }
}

/// 前置课程树节点
///
/// 由课程元数据文档的 `prerequisites` 反向推导：`unlocks`
/// 是以本课程为前置的后续课程。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrereqNode {
    /// 目录编号
    pub code: String,

    /// 课程名称
    pub name: String,

    /// 难度等级
    pub difficulty: Difficulty,

    /// 解锁的后续课程
    #[serde(default)]
    pub unlocks: Vec<PrereqNode>,
}

/// 用户学习路径
///
/// 把已完成课程、完整分支与下一步推荐合并成一份视图。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    /// 用户名
    pub username: String,

    /// 职业方向
    pub vocation: String,

    /// 已完成课程
    pub completed: Vec<String>,

    /// 完整分支（按层级排序）
    pub route: Vec<LeveledCourse>,

    /// 下一步推荐课程
    pub next: Vec<LeveledCourse>,
}

impl LearningPath {
    /// 视图中正在展示的课程：已完成课程加下一步推荐，去重。
    /// 无进度时就是推荐的首层课程。解锁书目以这份列表为准。
    pub fn visible_courses(&self) -> Vec<String> {
        let mut visible = self.completed.clone();
        for course in &self.next {
            if !visible.contains(&course.name) {
                visible.push(course.name.clone());
            }
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_course_deserializes_nested() {
        let json = r#"{
            "name": "Python para IA",
            "difficulty": "beginner",
            "followed_by": [
                {"name": "Machine Learning: De Cero a Práctico", "followed_by": []}
            ]
        }"#;

        let branch: BranchCourse = serde_json::from_str(json).unwrap();
        assert_eq!(branch.followed_by.len(), 1);
        assert!(branch.followed_by[0].difficulty.is_none());
    }

    fn leveled(name: &str, level: u32) -> LeveledCourse {
        LeveledCourse {
            name: name.to_string(),
            difficulty: Difficulty::Beginner,
            level,
        }
    }

    #[test]
    fn test_visible_courses_without_progress_are_the_recommendations() {
        let path = LearningPath {
            username: "lucasg".to_string(),
            vocation: "Desarrollo Web".to_string(),
            completed: vec![],
            route: vec![leveled("HTML y CSS Básico", 1), leveled("Git Esencial", 1)],
            next: vec![leveled("Git Esencial", 1), leveled("HTML y CSS Básico", 1)],
        };

        assert_eq!(
            path.visible_courses(),
            vec!["Git Esencial", "HTML y CSS Básico"]
        );
    }

    #[test]
    fn test_visible_courses_merge_completed_and_next() {
        let path = LearningPath {
            username: "anap".to_string(),
            vocation: "Desarrollo Web".to_string(),
            completed: vec!["HTML y CSS Básico".to_string()],
            route: vec![],
            next: vec![
                leveled("JavaScript Moderno", 2),
                leveled("HTML y CSS Básico", 1),
            ],
        };

        assert_eq!(
            path.visible_courses(),
            vec!["HTML y CSS Básico", "JavaScript Moderno"]
        );
    }

    #[test]
    fn test_load_report_absorb() {
        let mut report = LoadReport {
            courses_loaded: 2,
            links_created: 1,
            entries_skipped: 0,
        };
        report.absorb(LoadReport {
            courses_loaded: 3,
            links_created: 3,
            entries_skipped: 1,
        });

        assert_eq!(report.courses_loaded, 5);
        assert_eq!(report.links_created, 4);
        assert_eq!(report.entries_skipped, 1);
    }
}
