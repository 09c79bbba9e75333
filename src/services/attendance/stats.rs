//! 出勤汇总

use std::collections::HashSet;

use crate::models::attendance::{
    entities::{AttendanceRecord, AttendanceStatus},
    responses::{AttendanceStats, StudentAttendance},
};
use crate::utils::math::percentage_of;

/// 汇总一组出勤记录，空输入返回全零
pub fn calculate_attendance_stats(records: &[AttendanceRecord]) -> AttendanceStats {
    let total_classes = records.len() as u32;
    let total_student_records: u32 = records
        .iter()
        .map(|r| r.attendance_records.len() as u32)
        .sum();
    let total_present_records: u32 = records.iter().map(|r| r.present_count() as u32).sum();

    let students: HashSet<&str> = records
        .iter()
        .flat_map(|r| r.attendance_records.iter())
        .map(|entry| entry.student_id.as_str())
        .collect();

    let average_attendance = if total_classes > 0 {
        (total_student_records as f64 / total_classes as f64).round() as u32
    } else {
        0
    };

    AttendanceStats {
        total_classes,
        total_students: students.len() as u32,
        total_student_records,
        total_present_records,
        overall_attendance_rate: percentage_of(total_present_records, total_student_records),
        average_attendance,
    }
}

/// 单个学生在所有记录中的出勤情况
pub fn calculate_student_attendance(
    records: &[AttendanceRecord],
    student_id: &str,
) -> StudentAttendance {
    let statuses: Vec<AttendanceStatus> = records
        .iter()
        .filter_map(|r| r.status_of(student_id))
        .collect();

    let present = statuses
        .iter()
        .filter(|s| **s == AttendanceStatus::Present)
        .count() as u32;
    let total_classes = statuses.len() as u32;

    StudentAttendance {
        student_id: student_id.to_string(),
        total_classes,
        present,
        absent: total_classes - present,
        attendance_percentage: percentage_of(present, total_classes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::attendance_record;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        let stats = calculate_attendance_stats(&[]);
        assert_eq!(stats, AttendanceStats::default());
        assert_eq!(stats.total_classes, 0);
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.overall_attendance_rate, 0.0);
        assert_eq!(stats.average_attendance, 0);
    }

    #[test]
    fn test_two_classes_of_ten() {
        let records = vec![
            attendance_record("r1", "2024-03-01", "A", 10, 8),
            attendance_record("r2", "2024-03-02", "A", 10, 9),
        ];
        let stats = calculate_attendance_stats(&records);

        assert_eq!(stats.total_classes, 2);
        assert_eq!(stats.total_students, 10);
        assert_eq!(stats.total_student_records, 20);
        assert_eq!(stats.total_present_records, 17);
        assert_eq!(stats.overall_attendance_rate, 85.0);
        assert_eq!(stats.average_attendance, 10);
    }

    #[test]
    fn test_average_is_rounded() {
        let records = vec![
            attendance_record("r1", "2024-03-01", "A", 3, 3),
            attendance_record("r2", "2024-03-02", "A", 4, 1),
        ];
        let stats = calculate_attendance_stats(&records);
        // 7 / 2 = 3.5 → 4
        assert_eq!(stats.average_attendance, 4);
        // 4 / 7
        assert_eq!(stats.overall_attendance_rate, 57.14);
    }

    #[test]
    fn test_record_without_students() {
        let records = vec![attendance_record("r1", "2024-03-01", "A", 0, 0)];
        let stats = calculate_attendance_stats(&records);
        assert_eq!(stats.total_classes, 1);
        assert_eq!(stats.overall_attendance_rate, 0.0);
        assert_eq!(stats.average_attendance, 0);
    }

    #[test]
    fn test_single_student() {
        // 前 8 名学生第一天出勤，前 9 名第二天出勤
        let records = vec![
            attendance_record("r1", "2024-03-01", "A", 10, 8),
            attendance_record("r2", "2024-03-02", "A", 10, 9),
            attendance_record("r3", "2024-03-03", "A", 10, 0),
        ];

        let s9 = calculate_student_attendance(&records, "s9");
        assert_eq!(s9.total_classes, 3);
        assert_eq!(s9.present, 1);
        assert_eq!(s9.absent, 2);
        assert_eq!(s9.attendance_percentage, 33.33);

        let s1 = calculate_student_attendance(&records, "s1");
        assert_eq!(s1.present, 2);
        assert_eq!(s1.attendance_percentage, 66.67);
    }

    #[test]
    fn test_unknown_student() {
        let records = vec![attendance_record("r1", "2024-03-01", "A", 5, 5)];
        let report = calculate_student_attendance(&records, "nobody");
        assert_eq!(report.total_classes, 0);
        assert_eq!(report.attendance_percentage, 0.0);
    }
}
