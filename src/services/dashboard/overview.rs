use futures_util::future::try_join;
use tracing::debug;

use super::DashboardService;
use crate::errors::{PortalError, Result};
use crate::models::attendance::requests::AttendanceListQuery;
use crate::models::dashboard::responses::{ExamSummary, GradeCount, SubjectOverview};
use crate::models::marks::{
    entities::{ExamType, Grade, Mark},
    requests::MarkListQuery,
};
use crate::services::attendance::calculate_attendance_stats;
use crate::services::marks::grade::percentage_value;
use crate::utils::{round2, validate_division};

pub async fn subject_overview(
    service: &DashboardService,
    subject_id: &str,
    division: &str,
) -> Result<SubjectOverview> {
    let division = division.trim();
    validate_division(division).map_err(PortalError::invalid_input)?;

    let marks_query = MarkListQuery {
        division: Some(division.to_string()),
        exam_type: None,
    };
    let attendance_query = AttendanceListQuery::for_division(division);

    // 两个请求并发
    let (marks, records) = try_join(
        service.api().list_marks(subject_id, &marks_query),
        service.api().list_attendance(subject_id, &attendance_query),
    )
    .await?;

    debug!(
        "Overview for subject {} ({}): {} marks, {} attendance records",
        subject_id,
        division,
        marks.len(),
        records.len()
    );

    Ok(SubjectOverview {
        subject_id: subject_id.to_string(),
        division: division.to_string(),
        attendance: calculate_attendance_stats(&records),
        exams: summarize_exams(&marks),
    })
}

/// 按考试类型汇总成绩，只包含有记录的类型，顺序固定
///
/// 数值不合法的成绩计入数量，但不参与平均分与等级分布。
pub fn summarize_exams(marks: &[Mark]) -> Vec<ExamSummary> {
    ExamType::all()
        .iter()
        .filter_map(|exam_type| {
            let of_type: Vec<&Mark> = marks.iter().filter(|m| m.exam_type == *exam_type).collect();
            if of_type.is_empty() {
                return None;
            }

            let percentages: Vec<f64> = of_type
                .iter()
                .filter_map(|m| percentage_value(m.obtained_marks, m.max_marks).ok())
                .collect();

            let average_percentage = if percentages.is_empty() {
                0.0
            } else {
                round2(percentages.iter().sum::<f64>() / percentages.len() as f64)
            };

            Some(ExamSummary {
                exam_type: *exam_type,
                mark_count: of_type.len() as u32,
                average_percentage,
                grade_distribution: grade_distribution(&percentages),
            })
        })
        .collect()
}

/// 每个等级都返回，数量可以为 0
fn grade_distribution(percentages: &[f64]) -> Vec<GradeCount> {
    let mut counts = [0u32; Grade::ALL.len()];
    for percentage in percentages {
        counts[Grade::from_percentage(*percentage).rank()] += 1;
    }

    Grade::ALL
        .iter()
        .map(|grade| GradeCount {
            grade: *grade,
            count: counts[grade.rank()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{MockApi, attendance_record, mark};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_summary_grouping_and_order() {
        let marks = vec![
            mark("m1", "s1", "A", ExamType::Quiz, 9.0, 10.0),
            mark("m2", "s1", "A", ExamType::Internal1, 45.0, 50.0),
            mark("m3", "s2", "A", ExamType::Internal1, 30.0, 50.0),
            mark("m4", "s3", "A", ExamType::Internal1, 10.0, 50.0),
        ];
        let summary = summarize_exams(&marks);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].exam_type, ExamType::Internal1);
        assert_eq!(summary[1].exam_type, ExamType::Quiz);

        let internal = &summary[0];
        assert_eq!(internal.mark_count, 3);
        // (90 + 60 + 20) / 3
        assert_eq!(internal.average_percentage, 56.67);
        let count_of = |grade: Grade| {
            internal
                .grade_distribution
                .iter()
                .find(|c| c.grade == grade)
                .map(|c| c.count)
        };
        assert_eq!(count_of(Grade::APlus), Some(1));
        assert_eq!(count_of(Grade::B), Some(1));
        assert_eq!(count_of(Grade::F), Some(1));
        assert_eq!(count_of(Grade::C), Some(0));
        assert_eq!(internal.grade_distribution.len(), 7);
    }

    #[test]
    fn test_invalid_marks_are_counted_but_not_averaged() {
        let marks = vec![
            mark("m1", "s1", "A", ExamType::Viva, 8.0, 10.0),
            mark("m2", "s2", "A", ExamType::Viva, 12.0, 10.0),
        ];
        let summary = summarize_exams(&marks);
        assert_eq!(summary[0].mark_count, 2);
        assert_eq!(summary[0].average_percentage, 80.0);
        let graded: u32 = summary[0].grade_distribution.iter().map(|c| c.count).sum();
        assert_eq!(graded, 1);
    }

    #[test]
    fn test_empty_marks() {
        assert!(summarize_exams(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_subject_overview() {
        let api = Arc::new(MockApi::with_marks(vec![
            mark("m1", "s1", "A", ExamType::Practical, 18.0, 20.0),
            mark("m2", "s1", "B", ExamType::Practical, 5.0, 20.0),
        ]));
        // 出勤使用另一份数据源
        let attendance_api = Arc::new(MockApi::with_attendance(vec![
            attendance_record("r1", "2024-03-01", "A", 10, 8),
            attendance_record("r2", "2024-03-02", "A", 10, 9),
        ]));

        let overview = DashboardService::new(api)
            .subject_overview("sub1", "A")
            .await
            .unwrap();
        assert_eq!(overview.division, "A");
        assert_eq!(overview.exams.len(), 1);
        assert_eq!(overview.exams[0].average_percentage, 90.0);
        assert_eq!(overview.attendance.total_classes, 0);

        let overview = DashboardService::new(attendance_api)
            .subject_overview("sub1", " A ")
            .await
            .unwrap();
        assert_eq!(overview.attendance.overall_attendance_rate, 85.0);
        assert!(overview.exams.is_empty());
    }

    #[tokio::test]
    async fn test_overview_propagates_errors() {
        let err = DashboardService::new(Arc::new(MockApi::failing()))
            .subject_overview("sub1", "A")
            .await
            .unwrap_err();
        assert!(err.is_retryable());

        let err = DashboardService::new(Arc::new(MockApi::with_marks(vec![])))
            .subject_overview("sub1", "")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "P002");
    }
}
