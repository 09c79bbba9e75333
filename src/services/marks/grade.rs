//! 百分比与等级换算

use crate::errors::{PortalError, Result};
use crate::models::marks::entities::Grade;
use crate::utils::round2;

// 等级阈值，从高到低
const GRADE_THRESHOLDS: [(f64, Grade); 6] = [
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::BPlus),
    (60.0, Grade::B),
    (50.0, Grade::C),
    (40.0, Grade::D),
];

impl Grade {
    pub fn from_percentage(percentage: f64) -> Grade {
        GRADE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| percentage >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }
}

/// 检查得分与满分，满分必须为正，得分在 `[0, max]` 之间
fn check_marks(obtained: f64, max: f64) -> Result<()> {
    if !max.is_finite() || max <= 0.0 {
        return Err(PortalError::invalid_input(format!(
            "Maximum marks must be a positive number, got {max}"
        )));
    }
    if !obtained.is_finite() || obtained < 0.0 {
        return Err(PortalError::invalid_input(format!(
            "Obtained marks must be a non-negative number, got {obtained}"
        )));
    }
    if obtained > max {
        return Err(PortalError::invalid_input(format!(
            "Obtained marks ({obtained}) cannot exceed maximum marks ({max})"
        )));
    }
    Ok(())
}

/// 百分比数值，保留两位小数
pub fn percentage_value(obtained: f64, max: f64) -> Result<f64> {
    check_marks(obtained, max)?;
    Ok(round2(obtained / max * 100.0))
}

/// 百分比字符串，例如 `"85.00"`
pub fn calculate_percentage(obtained: f64, max: f64) -> Result<String> {
    percentage_value(obtained, max).map(|p| format!("{p:.2}"))
}

/// 按固定阈值换算等级
pub fn calculate_grade(obtained: f64, max: f64) -> Result<Grade> {
    percentage_value(obtained, max).map(Grade::from_percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_grades() {
        assert_eq!(calculate_grade(90.0, 100.0).unwrap(), Grade::APlus);
        assert_eq!(calculate_grade(55.0, 100.0).unwrap(), Grade::C);
        assert_eq!(calculate_grade(39.0, 100.0).unwrap(), Grade::F);
        assert_eq!(calculate_grade(40.0, 100.0).unwrap(), Grade::D);
        assert_eq!(calculate_grade(35.0, 50.0).unwrap(), Grade::BPlus);
        assert_eq!(calculate_grade(0.0, 20.0).unwrap(), Grade::F);
    }

    #[test]
    fn test_percentage_string() {
        assert_eq!(calculate_percentage(45.0, 50.0).unwrap(), "90.00");
        assert_eq!(calculate_percentage(2.0, 3.0).unwrap(), "66.67");
        assert_eq!(calculate_percentage(0.0, 10.0).unwrap(), "0.00");
    }

    #[test]
    fn test_percentage_is_rounded_to_two_places() {
        for max in [3.0, 7.0, 30.0, 45.0, 100.0] {
            let mut obtained = 0.0;
            while obtained <= max {
                let p = percentage_value(obtained, max).unwrap();
                assert_eq!(p, (obtained / max * 100.0 * 100.0).round() / 100.0);
                obtained += 1.0;
            }
        }
    }

    #[test]
    fn test_grade_monotonic() {
        let mut previous_rank = 0;
        for step in (0..=10_000).rev() {
            let percentage = step as f64 / 100.0;
            let rank = Grade::from_percentage(percentage).rank();
            assert!(rank >= previous_rank, "grade improved as percentage fell at {percentage}");
            previous_rank = rank;
        }
    }

    #[test]
    fn test_zero_max_is_rejected() {
        let err = calculate_percentage(1.0, 0.0).unwrap_err();
        assert_eq!(err.code(), "P002");
        assert!(calculate_grade(1.0, -5.0).is_err());
        assert!(calculate_grade(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_out_of_range_obtained_is_rejected() {
        assert!(calculate_grade(-1.0, 10.0).is_err());
        assert!(calculate_grade(11.0, 10.0).is_err());
    }
}
