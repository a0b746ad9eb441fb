use actix_web::{HttpResponse, web};

use super::respond;
use crate::middlewares::{CurrentUser, RequireAccess};
use crate::runtime::AppContext;
use crate::services::PageService;

pub async fn home(ctx: web::Data<AppContext>, user: CurrentUser) -> HttpResponse {
    let result = PageService::new(&ctx).home(user.tutor());
    respond(&ctx, &user, result)
}

pub async fn status(ctx: web::Data<AppContext>, user: CurrentUser) -> HttpResponse {
    let result = PageService::new(&ctx).status(user.tutor()).await;
    respond(&ctx, &user, result)
}

pub async fn open_ticket(ctx: web::Data<AppContext>) -> HttpResponse {
    PageService::new(&ctx).open_ticket()
}

pub async fn close_ticket(ctx: web::Data<AppContext>, ticket_id: web::Path<String>) -> HttpResponse {
    PageService::new(&ctx).close_ticket(&ticket_id)
}

// 配置路由
pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/index.html", web::get().to(home))
        .route("/status.html", web::get().to(status))
        .route("/open_ticket/", web::get().to(open_ticket))
        .route("/open_ticket/index.html", web::get().to(open_ticket))
        .service(
            web::resource("/close_ticket/{ticket_id}")
                .wrap(RequireAccess::logged_in())
                .route(web::get().to(close_ticket)),
        );
}
