use serde::{Deserialize, Serialize};

// 课程班级实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub id: i64,
    pub number: String,
    pub course_id: i64,
    pub semester_id: i64,
    pub professor_id: Option<i64>,
}
