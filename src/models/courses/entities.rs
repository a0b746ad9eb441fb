use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../static/js/types/portal.ts")]
pub struct Course {
    pub id: i64,
    pub number: String,
    pub name: String,
    pub on_display: bool,
}

impl Course {
    /// 例如 "CSCI 1620 - Computer Science II"
    pub fn label(&self) -> String {
        format!("{} - {}", self.number, self.name)
    }
}
