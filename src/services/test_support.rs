//! 服务层测试用的内存后端

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::PortalApi;
use crate::errors::{ApiFailure, PortalError, Result};
use crate::models::attendance::{
    entities::{AttendanceRecord, AttendanceStatus, StudentAttendanceEntry},
    requests::{AttendanceListQuery, CreateAttendanceRequest},
};
use crate::models::marks::{
    entities::{ExamType, Mark},
    requests::{MarkListQuery, MarksSubmission, UpdateMarkRequest},
};
use crate::models::reference::entities::{ReferenceEntity, ReferenceKind};
use crate::utils::RequestSequencer;

#[derive(Default)]
pub struct MockApi {
    marks: Mutex<Vec<Mark>>,
    attendance: Mutex<Vec<AttendanceRecord>>,
    references: Mutex<Vec<(ReferenceKind, ReferenceEntity)>>,
    fail: bool,
    next_id: AtomicUsize,
    list_marks_calls: AtomicUsize,
    create_marks_calls: AtomicUsize,
    list_reference_calls: AtomicUsize,
    supersede: Mutex<Option<(Arc<RequestSequencer>, String)>>,
}

impl MockApi {
    pub fn with_marks(marks: Vec<Mark>) -> Self {
        Self {
            marks: Mutex::new(marks),
            ..Default::default()
        }
    }

    pub fn with_attendance(records: Vec<AttendanceRecord>) -> Self {
        Self {
            attendance: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn with_references(references: Vec<(ReferenceKind, ReferenceEntity)>) -> Self {
        Self {
            references: Mutex::new(references),
            ..Default::default()
        }
    }

    /// 所有调用都返回网络错误
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// 列表请求在途时在同一展示位上发起一个更新的请求
    pub fn supersede_during_list(&self, sequencer: Arc<RequestSequencer>, slot: &str) {
        *self.supersede.lock().unwrap() = Some((sequencer, slot.to_string()));
    }

    pub fn clear_supersede(&self) {
        *self.supersede.lock().unwrap() = None;
    }

    fn supersede_now(&self) {
        if let Some((sequencer, slot)) = self.supersede.lock().unwrap().as_ref() {
            sequencer.begin(slot.clone());
        }
    }

    pub fn list_marks_calls(&self) -> usize {
        self.list_marks_calls.load(Ordering::SeqCst)
    }

    pub fn create_marks_calls(&self) -> usize {
        self.create_marks_calls.load(Ordering::SeqCst)
    }

    pub fn list_reference_calls(&self) -> usize {
        self.list_reference_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(PortalError::network("connection refused"))
        } else {
            Ok(())
        }
    }

    fn new_id(&self) -> String {
        format!("new-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn not_found(what: &str) -> PortalError {
        PortalError::api(ApiFailure::new(format!("{what} not found"), Some(404)))
    }
}

#[async_trait]
impl PortalApi for MockApi {
    async fn list_marks(&self, subject_id: &str, query: &MarkListQuery) -> Result<Vec<Mark>> {
        self.list_marks_calls.fetch_add(1, Ordering::SeqCst);
        self.supersede_now();
        self.check()?;

        let marks = self.marks.lock().unwrap();
        Ok(marks
            .iter()
            .filter(|m| m.subject_id.as_deref().is_none_or(|s| s == subject_id))
            .filter(|m| query.division.as_ref().is_none_or(|d| &m.division == d))
            .filter(|m| query.exam_type.is_none_or(|t| m.exam_type == t))
            .cloned()
            .collect())
    }

    async fn create_marks(
        &self,
        subject_id: &str,
        submission: &MarksSubmission,
    ) -> Result<Vec<Mark>> {
        self.create_marks_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let created: Vec<Mark> = submission
            .marks_data
            .iter()
            .map(|entry| Mark {
                id: self.new_id(),
                student_id: entry.student_id.clone(),
                subject_id: Some(subject_id.to_string()),
                obtained_marks: entry.obtained_marks,
                max_marks: submission.max_marks,
                exam_type: submission.exam_type,
                division: submission.division.clone(),
                exam_date: submission.exam_date,
                remarks: entry.remarks.clone().or_else(|| submission.remarks.clone()),
            })
            .collect();
        self.marks.lock().unwrap().extend(created.iter().cloned());
        Ok(created)
    }

    async fn update_mark(&self, mark_id: &str, update: &UpdateMarkRequest) -> Result<Mark> {
        self.check()?;
        let mut marks = self.marks.lock().unwrap();
        let mark = marks
            .iter_mut()
            .find(|m| m.id == mark_id)
            .ok_or_else(|| Self::not_found("Mark"))?;

        if let Some(obtained) = update.obtained_marks {
            mark.obtained_marks = obtained;
        }
        if let Some(max) = update.max_marks {
            mark.max_marks = max;
        }
        if let Some(date) = update.exam_date {
            mark.exam_date = date;
        }
        if let Some(remarks) = &update.remarks {
            mark.remarks = Some(remarks.clone());
        }
        Ok(mark.clone())
    }

    async fn delete_mark(&self, mark_id: &str) -> Result<()> {
        self.check()?;
        let mut marks = self.marks.lock().unwrap();
        let before = marks.len();
        marks.retain(|m| m.id != mark_id);
        if marks.len() == before {
            return Err(Self::not_found("Mark"));
        }
        Ok(())
    }

    async fn list_attendance(
        &self,
        subject_id: &str,
        query: &AttendanceListQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        self.supersede_now();
        self.check()?;
        let records = self.attendance.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.subject_id == subject_id)
            .filter(|r| query.division.as_ref().is_none_or(|d| &r.division == d))
            .filter(|r| query.from.is_none_or(|from| r.date >= from))
            .filter(|r| query.to.is_none_or(|to| r.date <= to))
            .cloned()
            .collect())
    }

    async fn create_attendance(
        &self,
        request: &CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        self.check()?;
        let record = AttendanceRecord {
            id: self.new_id(),
            date: request.date,
            subject_id: request.subject_id.clone(),
            division: request.division.clone(),
            attendance_records: request.attendance_records.clone(),
        };
        self.attendance.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_references(
        &self,
        kind: ReferenceKind,
        filters: &[(String, String)],
    ) -> Result<Vec<ReferenceEntity>> {
        self.list_reference_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let references = self.references.lock().unwrap();
        Ok(references
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, entity)| entity)
            .filter(|entity| {
                filters
                    .iter()
                    .all(|(key, value)| entity.field_str(key) == Some(value.as_str()))
            })
            .cloned()
            .collect())
    }

    async fn get_reference(
        &self,
        kind: ReferenceKind,
        id: &str,
    ) -> Result<Option<ReferenceEntity>> {
        self.check()?;
        let references = self.references.lock().unwrap();
        Ok(references
            .iter()
            .find(|(k, entity)| *k == kind && entity.id == id)
            .map(|(_, entity)| entity.clone()))
    }

    async fn create_reference(&self, kind: ReferenceKind, body: &Value) -> Result<ReferenceEntity> {
        self.check()?;
        let entity = ReferenceEntity {
            id: self.new_id(),
            fields: body.as_object().cloned().unwrap_or_default(),
        };
        self.references.lock().unwrap().push((kind, entity.clone()));
        Ok(entity)
    }

    async fn update_reference(
        &self,
        kind: ReferenceKind,
        id: &str,
        body: &Value,
    ) -> Result<ReferenceEntity> {
        self.check()?;
        let mut references = self.references.lock().unwrap();
        let (_, entity) = references
            .iter_mut()
            .find(|(k, entity)| *k == kind && entity.id == id)
            .ok_or_else(|| Self::not_found(&kind.to_string()))?;
        if let Some(fields) = body.as_object() {
            entity.fields.extend(fields.clone());
        }
        Ok(entity.clone())
    }

    async fn delete_reference(&self, kind: ReferenceKind, id: &str) -> Result<()> {
        self.check()?;
        let mut references = self.references.lock().unwrap();
        let before = references.len();
        references.retain(|(k, entity)| !(*k == kind && entity.id == id));
        if references.len() == before {
            return Err(Self::not_found(&kind.to_string()));
        }
        Ok(())
    }
}

/// 2024-03-01 在 sub1 上的一条成绩
pub fn mark(
    id: &str,
    student_id: &str,
    division: &str,
    exam_type: ExamType,
    obtained_marks: f64,
    max_marks: f64,
) -> Mark {
    Mark {
        id: id.to_string(),
        student_id: student_id.to_string(),
        subject_id: Some("sub1".to_string()),
        obtained_marks,
        max_marks,
        exam_type,
        division: division.to_string(),
        exam_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        remarks: None,
    }
}

/// sub1 上一次课，学生 s1..=s{students}，前 `present` 名出勤
pub fn attendance_record(
    id: &str,
    date: &str,
    division: &str,
    students: usize,
    present: usize,
) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        subject_id: "sub1".to_string(),
        division: division.to_string(),
        attendance_records: (1..=students)
            .map(|n| {
                let status = if n <= present {
                    AttendanceStatus::Present
                } else {
                    AttendanceStatus::Absent
                };
                StudentAttendanceEntry::new(format!("s{n}"), status)
            })
            .collect(),
    }
}

/// 带名称字段的参考实体
pub fn reference(id: &str, name: &str) -> ReferenceEntity {
    let mut fields = Map::new();
    fields.insert("name".to_string(), Value::from(name));
    ReferenceEntity {
        id: id.to_string(),
        fields,
    }
}
