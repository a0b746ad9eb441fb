//! 会话身份认证
//!
//! 会话中只保存登录邮箱，每次请求重新查询辅导员记录。

use actix_session::Session;
use tracing::info;

use crate::errors::{PortalError, Result};
use crate::models::tutors::entities::Tutor;
use crate::runtime::AuthSettings;
use crate::storage::{Fetched, TutorDirectory};

/// 会话中保存登录邮箱的键
pub const SESSION_IDENTITY_KEY: &str = "username";

/// 解析当前登录的辅导员
///
/// - 会话中没有身份时直接返回 None，不访问数据库
/// - 找不到或已停用的身份会清空会话
/// - 同一邮箱匹配多条记录视为数据错误
#[cfg_attr(not(debug_assertions), allow(unused_variables))]
pub async fn authenticate<D>(
    session: &Session,
    directory: &D,
    settings: &AuthSettings,
) -> Result<Option<Tutor>>
where
    D: TutorDirectory + ?Sized,
{
    let Some(email) = session.get::<String>(SESSION_IDENTITY_KEY)? else {
        return Ok(None);
    };

    #[cfg(debug_assertions)]
    if settings.debug_identity {
        return Ok(Some(Tutor::debug_identity(&email)));
    }

    match directory.find_tutor_by_email(&email).await? {
        Fetched::Found(tutor) if tutor.is_active => Ok(Some(tutor)),
        Fetched::Found(_) => {
            info!("Inactive tutor {} tried to use a session", email);
            session.clear();
            Ok(None)
        }
        Fetched::NotFound => {
            info!("Session identity {} no longer exists", email);
            session.clear();
            Ok(None)
        }
        Fetched::Ambiguous => Err(PortalError::ambiguous(format!(
            "tutor email {email} matched more than one row"
        ))),
    }
}
