use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("Invalid identifier regex"));

static DIVISION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _-]{0,15}$").expect("Invalid division regex"));

/// 校验拼接进 URL 路径的实体 ID
pub fn validate_identifier(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("Identifier must not be empty");
    }
    if !IDENTIFIER_RE.is_match(id) {
        return Err("Identifier must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

/// 校验分班名称，例如 "A"、"B2"
pub fn validate_division(division: &str) -> Result<(), &'static str> {
    if division.trim().is_empty() {
        return Err("Division is required");
    }
    if !DIVISION_RE.is_match(division.trim()) {
        return Err("Division must be at most 16 letters, digits, spaces, underscores or hyphens");
    }
    Ok(())
}

/// 去除首尾空白后为空则视为缺失
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
