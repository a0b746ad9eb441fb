pub mod login;
pub mod logout;
pub mod session;

use actix_session::Session;
use actix_web::{HttpResponse, Result as ActixResult};

use crate::runtime::AppContext;

pub use session::{SESSION_IDENTITY_KEY, authenticate};

pub struct AuthService<'a> {
    ctx: &'a AppContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    // 登录（调试模式写入测试身份，否则跳转统一认证）
    pub async fn login(&self, session: &Session) -> ActixResult<HttpResponse> {
        login::handle_login(self.ctx, session).await
    }

    // 登出
    pub async fn logout(&self, session: &Session) -> ActixResult<HttpResponse> {
        logout::handle_logout(session).await
    }
}
