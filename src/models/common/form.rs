//! 后台表单字段读取
//!
//! 表单以 `application/x-www-form-urlencoded` 提交，统一解析为字符串映射，
//! 再由各实体的表单类型按需取值。空白字段视为未提交。

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::{PortalError, Result};

/// 表单中使用的日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    /// 读取字段，去除首尾空白，空字符串视为缺失
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// 读取必填字段
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| PortalError::validation(format!("Missing required field: {key}")))
    }

    /// 读取必填整数字段
    pub fn require_int<T: FromStr>(&self, key: &str) -> Result<T> {
        self.require(key)?
            .parse()
            .map_err(|_| PortalError::validation(format!("Field '{key}' must be an integer")))
    }

    /// 读取必填日期字段（YYYY-MM-DD）
    pub fn require_date(&self, key: &str) -> Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(self.require(key)?, DATE_FORMAT)?)
    }

    /// 读取可选整数字段：空白为 None，有值但无法解析时报错
    pub fn optional_int(&self, key: &str) -> Result<Option<i64>> {
        self.get(key)
            .map(|value| {
                value.parse().map_err(|_| {
                    PortalError::validation(format!("Field '{key}' must be an integer"))
                })
            })
            .transpose()
    }

    /// 复选框是否勾选
    pub fn checked(&self, key: &str) -> bool {
        matches!(self.get(key), Some(value) if !matches!(value, "0" | "false" | "off"))
    }

    /// 记录 ID（新建时为空）
    pub fn id(&self) -> Result<Option<i64>> {
        self.optional_int("id")
    }

    /// 是否为删除操作
    pub fn is_delete(&self) -> bool {
        self.get("action") == Some("delete")
    }

    /// 收集形如 `{prefix}{id}` 且已勾选的复选框 ID
    pub fn checked_ids(&self, prefix: &str) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .0
            .keys()
            .filter_map(|key| key.strip_prefix(prefix))
            .filter_map(|rest| rest.parse::<i64>().ok())
            .filter(|id| self.checked(&format!("{prefix}{id}")))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(fields: HashMap<String, String>) -> Self {
        Self::new(fields)
    }
}
