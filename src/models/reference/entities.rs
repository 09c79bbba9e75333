use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// 参考数据类型：学期、科目、学生、教师
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Semester,
    Subject,
    Student,
    Teacher,
}

impl ReferenceKind {
    pub fn all() -> &'static [ReferenceKind] {
        &[Self::Semester, Self::Subject, Self::Student, Self::Teacher]
    }

    /// 接口集合路径
    pub fn collection(&self) -> &'static str {
        match self {
            ReferenceKind::Semester => "semesters",
            ReferenceKind::Subject => "subjects",
            ReferenceKind::Student => "students",
            ReferenceKind::Teacher => "teachers",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Semester => write!(f, "semester"),
            ReferenceKind::Subject => write!(f, "subject"),
            ReferenceKind::Student => write!(f, "student"),
            ReferenceKind::Teacher => write!(f, "teacher"),
        }
    }
}

/// 只读为主的参考实体，除 id 外的字段原样保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ReferenceEntity {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// 展示名称
    pub fn display_name(&self) -> &str {
        self.field_str("name")
            .or_else(|| self.field_str("title"))
            .unwrap_or(&self.id)
    }
}
