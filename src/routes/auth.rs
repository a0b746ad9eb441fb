use actix_session::Session;
use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::runtime::AppContext;
use crate::services::AuthService;

pub async fn login(ctx: web::Data<AppContext>, session: Session) -> ActixResult<HttpResponse> {
    AuthService::new(&ctx).login(&session).await
}

pub async fn logout(ctx: web::Data<AppContext>, session: Session) -> ActixResult<HttpResponse> {
    AuthService::new(&ctx).logout(&session).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login/", web::get().to(login))
        .route("/logout/", web::get().to(logout));
}
