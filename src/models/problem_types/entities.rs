use serde::{Deserialize, Serialize};

// 问题类型（工单分类）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemType {
    pub id: i64,
    pub description: String,
}
