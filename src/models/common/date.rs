//! 日期解析
//!
//! 后端可能返回 `2024-03-01` 或完整的 ISO 8601 时间戳，统一取日期部分。

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::errors::{PortalError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析日期字符串（`YYYY-MM-DD` 或 RFC 3339）
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|e| PortalError::date_parse(format!("Invalid date '{value}': {e}")))
}

pub fn deserialize_flexible_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}
