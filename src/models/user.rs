use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用户档案
///
/// 文档侧的用户记录。`progress` 保存已完成课程名称列表，
/// 是路径推荐的输入。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识
    pub id: String,

    /// 用户名（唯一）
    pub username: String,

    /// 出生日期
    pub birth_date: NaiveDate,

    /// 年龄（由出生日期推导）
    pub age: u32,

    /// 职业方向名称
    pub vocation: String,

    /// 已完成课程名称列表
    pub progress: Vec<String>,

    /// 创建时间
    pub created_at: DateTime<Utc>,

    /// 最后更新时间
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 创建新用户
    pub fn new(username: &str, birth_date: NaiveDate, vocation: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            birth_date,
            age: compute_age(birth_date, now.date_naive()),
            vocation: vocation.to_string(),
            progress: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 更新最后修改时间
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// 修改出生日期并重算年龄
    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = birth_date;
        self.age = compute_age(birth_date, Utc::now().date_naive());
        self.touch();
    }

    /// 标记课程完成，重复完成不产生变化
    ///
    /// 返回是否真的写入了进度。
    pub fn complete_course(&mut self, course_name: &str) -> bool {
        if self.progress.iter().any(|c| c == course_name) {
            return false;
        }
        self.progress.push(course_name.to_string());
        self.touch();
        true
    }

    /// 是否已有任何学习进度
    pub fn has_progress(&self) -> bool {
        !self.progress.is_empty()
    }
}

/// 根据出生日期计算整数年龄
pub fn compute_age(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0) as u32
}
