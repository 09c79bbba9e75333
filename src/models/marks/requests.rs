use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::number::deserialize_optional_f64;
use crate::models::marks::entities::ExamType;

/// 教师录入表单的原始内容，字段均可能缺失
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct MarksDraft {
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub exam_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub max_marks: Option<f64>,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub marks_data: Vec<StudentMarkDraft>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct StudentMarkDraft {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub obtained_marks: Option<f64>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl StudentMarkDraft {
    pub fn new(student_id: impl Into<String>, obtained_marks: f64) -> Self {
        Self {
            student_id: Some(student_id.into()),
            obtained_marks: Some(obtained_marks),
            remarks: None,
        }
    }
}

/// 校验通过后发送给后端的成绩提交
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct MarksSubmission {
    pub division: String,
    pub exam_type: ExamType,
    pub max_marks: f64,
    pub exam_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub marks_data: Vec<StudentMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct StudentMark {
    pub student_id: String,
    pub obtained_marks: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// 更新单条成绩
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct UpdateMarkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obtained_marks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_marks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// 成绩列表筛选
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkListQuery {
    pub division: Option<String>,
    pub exam_type: Option<ExamType>,
}

impl MarkListQuery {
    pub fn new(division: impl Into<String>, exam_type: ExamType) -> Self {
        Self {
            division: Some(division.into()),
            exam_type: Some(exam_type),
        }
    }

    /// 转换为查询字符串参数
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(division) = &self.division {
            pairs.push(("division", division.clone()));
        }
        if let Some(exam_type) = &self.exam_type {
            pairs.push(("examType", exam_type.to_string()));
        }
        pairs
    }
}
