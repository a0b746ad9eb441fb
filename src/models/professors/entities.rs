use serde::{Deserialize, Serialize};

// 教授实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Professor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Professor {
    /// "姓, 名" 形式的显示名称
    pub fn last_first(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}
