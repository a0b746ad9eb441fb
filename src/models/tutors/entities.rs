use serde::{Deserialize, Serialize};

// 辅导员实体，同时作为登录身份
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tutor {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl Tutor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn last_first(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// 调试模式下使用的虚拟管理员身份，不写入数据库
    #[cfg(debug_assertions)]
    pub fn debug_identity(email: &str) -> Self {
        Self {
            id: 0,
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            is_active: true,
            is_superuser: true,
        }
    }
}
