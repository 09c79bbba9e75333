use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::date::deserialize_flexible_date;

// 考试类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub enum ExamType {
    #[serde(rename = "Internal 1")]
    Internal1,
    #[serde(rename = "Internal 2")]
    Internal2,
    #[serde(rename = "Internal 3")]
    Internal3,
    Assignment,
    Quiz,
    Practical,
    Viva,
}

impl ExamType {
    pub const INTERNAL_1: &'static str = "Internal 1";
    pub const INTERNAL_2: &'static str = "Internal 2";
    pub const INTERNAL_3: &'static str = "Internal 3";
    pub const ASSIGNMENT: &'static str = "Assignment";
    pub const QUIZ: &'static str = "Quiz";
    pub const PRACTICAL: &'static str = "Practical";
    pub const VIVA: &'static str = "Viva";

    pub fn all() -> &'static [ExamType] {
        &[
            Self::Internal1,
            Self::Internal2,
            Self::Internal3,
            Self::Assignment,
            Self::Quiz,
            Self::Practical,
            Self::Viva,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Internal1 => Self::INTERNAL_1,
            ExamType::Internal2 => Self::INTERNAL_2,
            ExamType::Internal3 => Self::INTERNAL_3,
            ExamType::Assignment => Self::ASSIGNMENT,
            ExamType::Quiz => Self::QUIZ,
            ExamType::Practical => Self::PRACTICAL,
            ExamType::Viva => Self::VIVA,
        }
    }
}

impl<'de> Deserialize<'de> for ExamType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|t| t.as_str() == s.trim())
            .copied()
            .ok_or_else(|| format!("Invalid exam type: {s}"))
    }
}

// 等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// 从高到低
    pub const ALL: [Grade; 7] = [
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// 名次，0 为最高
    pub fn rank(&self) -> usize {
        Self::ALL.iter().position(|g| g == self).unwrap_or(Self::ALL.len())
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// 成绩记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct Mark {
    #[serde(alias = "_id")]
    pub id: String,
    pub student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    pub obtained_marks: f64,
    pub max_marks: f64,
    pub exam_type: ExamType,
    pub division: String,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub exam_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl AsRef<Mark> for Mark {
    fn as_ref(&self) -> &Mark {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_type_roundtrip_names() {
        for exam_type in ExamType::all() {
            let json = serde_json::to_string(exam_type).unwrap();
            let parsed: ExamType = serde_json::from_str(&json).unwrap();
            assert_eq!(&parsed, exam_type);
        }
        assert_eq!(serde_json::to_string(&ExamType::Internal1).unwrap(), "\"Internal 1\"");
    }

    #[test]
    fn test_unknown_exam_type_rejected() {
        assert!(serde_json::from_str::<ExamType>("\"Final\"").is_err());
        assert!("Midterm".parse::<ExamType>().is_err());
    }

    #[test]
    fn test_mark_from_backend_json() {
        let json = r#"{
            "_id": "m1",
            "studentId": "s1",
            "obtainedMarks": 42,
            "maxMarks": 50,
            "examType": "Quiz",
            "division": "A",
            "examDate": "2024-03-01T00:00:00.000Z"
        }"#;
        let mark: Mark = serde_json::from_str(json).unwrap();
        assert_eq!(mark.id, "m1");
        assert_eq!(mark.exam_type, ExamType::Quiz);
        assert_eq!(mark.exam_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(mark.remarks, None);
    }

    #[test]
    fn test_grade_serialization() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::BPlus).unwrap(), "\"B+\"");
        assert_eq!(Grade::APlus.rank(), 0);
        assert_eq!(Grade::F.rank(), 6);
    }
}
