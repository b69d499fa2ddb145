use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 课程难度等级
///
/// 排序约定：入门 < 进阶 < 高级；「不限难度」的课程在分组时排在最后。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 入门
    Beginner,
    /// 进阶
    Intermediate,
    /// 高级
    Advanced,
    /// 不限难度
    AllLevels,
}

impl Difficulty {
    /// 分组时使用的固定顺序
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::AllLevels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::AllLevels => "all_levels",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "all_levels" | "all-levels" => Ok(Difficulty::AllLevels),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Beginner
    }
}

/// 课程图节点
///
/// 图谱侧的课程只携带名称与难度；描述、主题等元数据保存在
/// [`CourseRecord`] 文档中。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// 课程唯一标识
    pub id: String,

    /// 课程名称（图谱内唯一）
    pub name: String,

    /// 难度等级
    pub difficulty: Difficulty,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// 创建新课程节点
    pub fn new(name: &str, difficulty: Difficulty) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            difficulty,
            created_at: Utc::now(),
        }
    }
}

/// 课程元数据文档
///
/// 文档侧的课程记录，承载目录编号、前置课程列表与解锁的书目。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    /// 文档唯一标识
    pub id: String,

    /// 目录编号（例如 PYAI001）
    pub code: String,

    /// 课程名称
    pub name: String,

    /// 课程描述
    pub description: String,

    /// 难度等级
    pub difficulty: Difficulty,

    /// 主题列表
    pub topics: Vec<String>,

    /// 前置课程（目录编号或自由文本）
    pub prerequisites: Vec<String>,

    /// 完成后解锁的书目标题
    pub unlocks_bibliography: Option<String>,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl CourseRecord {
    /// 创建新课程记录
    pub fn new(code: &str, name: &str, description: &str, difficulty: Difficulty) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            difficulty,
            topics: Vec::new(),
            prerequisites: Vec::new(),
            unlocks_bibliography: None,
            created_at: Utc::now(),
        }
    }

    /// 设置主题列表
    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }

    /// 设置前置课程
    pub fn with_prerequisites(mut self, prerequisites: Vec<String>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    /// 设置解锁书目
    pub fn with_bibliography(mut self, title: &str) -> Self {
        self.unlocks_bibliography = Some(title.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("beginner", Difficulty::Beginner)]
    #[case("Intermediate", Difficulty::Intermediate)]
    #[case("ADVANCED", Difficulty::Advanced)]
    #[case("all_levels", Difficulty::AllLevels)]
    #[case("all-levels", Difficulty::AllLevels)]
    fn test_difficulty_parse(#[case] input: &str, #[case] expected: Difficulty) {
        assert_eq!(input.parse::<Difficulty>().unwrap(), expected);
    }

    #[test]
    fn test_difficulty_parse_rejects_unknown() {
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
        assert!(Difficulty::Advanced < Difficulty::AllLevels);
    }

    #[test]
    fn test_course_new() {
        let course = Course::new("HTML y CSS Básico", Difficulty::Beginner);
        assert_eq!(course.name, "HTML y CSS Básico");
        assert_eq!(course.difficulty, Difficulty::Beginner);
        assert!(!course.id.is_empty());
    }

    #[test]
    fn test_course_record_builders() {
        let record = CourseRecord::new(
            "MLBASICO002",
            "Machine Learning: De Cero a Práctico",
            "Introducción completa al Machine Learning",
            Difficulty::Beginner,
        )
        .with_topics(vec!["Aprendizaje Supervisado".into()])
        .with_prerequisites(vec!["PYAI001".into()])
        .with_bibliography("MachineLearning_Modelos_Fundamentales");

        assert_eq!(record.prerequisites, vec!["PYAI001".to_string()]);
        assert_eq!(
            record.unlocks_bibliography.as_deref(),
            Some("MachineLearning_Modelos_Fundamentales")
        );
    }
}
