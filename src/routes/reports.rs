use actix_web::{HttpResponse, web};

use super::respond;
use crate::middlewares::{CurrentUser, RequireAccess};
use crate::runtime::AppContext;
use crate::services::ReportService;

pub async fn tickets(ctx: web::Data<AppContext>, user: CurrentUser) -> HttpResponse {
    let result = ReportService::new(&ctx).tickets().await;
    respond(&ctx, &user, result)
}

pub async fn availability(ctx: web::Data<AppContext>, user: CurrentUser) -> HttpResponse {
    let result = ReportService::new(&ctx).availability().await;
    respond(&ctx, &user, result)
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tickets.json")
            .wrap(RequireAccess::logged_in())
            .route(web::get().to(tickets)),
    )
    .route("/availability.json", web::get().to(availability));
}
