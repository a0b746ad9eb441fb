use actix_session::Session;
use actix_web::{HttpResponse, Result as ActixResult};

use crate::services::pages::redirect;

/// 处理登出
/// 清空会话后回到首页
pub async fn handle_logout(session: &Session) -> ActixResult<HttpResponse> {
    session.purge();
    Ok(redirect("/"))
}
