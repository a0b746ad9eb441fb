//! 会话身份与访问控制中间件

pub mod load_user;
pub mod require_access;

pub use load_user::{CurrentUser, LoadUser};
pub use require_access::RequireAccess;
