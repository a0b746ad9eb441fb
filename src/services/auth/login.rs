use actix_session::Session;
use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use crate::runtime::AppContext;
use crate::services::pages::redirect;

/// 处理登录
/// 先清空会话；调试构建且开启调试身份时直接写入测试邮箱，否则跳转到统一认证登录页
pub async fn handle_login(ctx: &AppContext, session: &Session) -> ActixResult<HttpResponse> {
    session.clear();

    #[cfg(debug_assertions)]
    if ctx.auth.debug_identity {
        session
            .insert(super::SESSION_IDENTITY_KEY, &ctx.auth.debug_email)
            .map_err(crate::errors::PortalError::from)?;
        info!("Debug login as {}", ctx.auth.debug_email);
        return Ok(redirect("/"));
    }

    info!("Redirecting to single sign-on");
    Ok(redirect(&ctx.auth.sso_url))
}
