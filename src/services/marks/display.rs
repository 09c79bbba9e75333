//! 成绩展示字段

use crate::models::marks::{
    entities::Mark,
    responses::MarkDisplay,
};
use crate::services::marks::grade::{calculate_grade, calculate_percentage};

pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// 为成绩附加百分比、等级与格式化日期
///
/// 展示字段总是从原始成绩重新计算，因此对结果再次调用得到相同结果。
/// 数据异常（例如满分为 0）时百分比显示为 `"-"`，等级为空。
pub fn format_marks_for_display<M: AsRef<Mark>>(marks: &[M]) -> Vec<MarkDisplay> {
    marks
        .iter()
        .map(|m| {
            let mark = m.as_ref();
            MarkDisplay {
                mark: mark.clone(),
                percentage: calculate_percentage(mark.obtained_marks, mark.max_marks)
                    .unwrap_or_else(|_| "-".to_string()),
                grade: calculate_grade(mark.obtained_marks, mark.max_marks).ok(),
                formatted_date: mark.exam_date.format(DISPLAY_DATE_FORMAT).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::marks::entities::{ExamType, Grade};
    use crate::services::test_support::mark;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_fields() {
        let marks = vec![mark("m1", "s1", "A", ExamType::Internal1, 42.0, 50.0)];
        let displayed = format_marks_for_display(&marks);

        assert_eq!(displayed[0].percentage, "84.00");
        assert_eq!(displayed[0].grade, Some(Grade::A));
        assert_eq!(displayed[0].formatted_date, "01 Mar 2024");
    }

    #[test]
    fn test_idempotent() {
        let marks = vec![
            mark("m1", "s1", "A", ExamType::Quiz, 7.0, 9.0),
            mark("m2", "s2", "A", ExamType::Quiz, 0.0, 9.0),
        ];
        let once = format_marks_for_display(&marks);
        let twice = format_marks_for_display(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_mark_has_no_grade() {
        let marks = vec![mark("m1", "s1", "A", ExamType::Quiz, 5.0, 0.0)];
        let displayed = format_marks_for_display(&marks);
        assert_eq!(displayed[0].percentage, "-");
        assert_eq!(displayed[0].grade, None);
    }
}
