//! 路由层
//!
//! 每个子模块提供一个 `configure_*` 函数，由 `configure_routes` 统一注册。
//! 未匹配的路径由 `not_found` 渲染 404 错误页。

pub mod admin;
pub mod auth;
pub mod frontend;
pub mod pages;
pub mod reports;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, http::StatusCode, web};

use crate::errors::{NOT_FOUND_PAGE_MESSAGE, Result};
use crate::middlewares::CurrentUser;
use crate::runtime::AppContext;
use crate::services::pages::error_page;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use frontend::configure_frontend_routes;
pub use pages::configure_page_routes;
pub use reports::configure_report_routes;

/// 注册全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_page_routes)
        .configure(configure_auth_routes)
        .configure(configure_report_routes)
        .configure(configure_admin_routes)
        .configure(configure_frontend_routes);
}

/// 404 错误页
pub fn not_found_page(ctx: &AppContext, user: &CurrentUser) -> HttpResponse {
    error_page(
        &ctx.templates,
        StatusCode::NOT_FOUND,
        NOT_FOUND_PAGE_MESSAGE,
        user.tutor(),
    )
}

/// 处理结果转换为响应，错误页沿用应用模板和当前登录身份
pub fn respond(
    ctx: &AppContext,
    user: &CurrentUser,
    result: Result<HttpResponse>,
) -> HttpResponse {
    result.unwrap_or_else(|e| e.render_page(&ctx.templates, user.tutor()))
}

/// 默认服务
pub async fn not_found(ctx: web::Data<AppContext>, user: CurrentUser) -> HttpResponse {
    not_found_page(&ctx, &user)
}
