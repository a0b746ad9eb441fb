//! 数据模型定义
//!
//! 每个子模块包含：
//! - `entities`: 业务实体
//! - `requests`: 后台表单解析结果

pub mod common;
pub mod courses;
pub mod problem_types;
pub mod professors;
pub mod reports;
pub mod sections;
pub mod semesters;
pub mod system;
pub mod tickets;
pub mod tutors;

pub use common::{FormFields, JsonList};
