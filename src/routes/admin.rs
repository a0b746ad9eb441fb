use std::collections::HashMap;

use actix_web::{HttpResponse, web};

use super::{not_found_page, respond};
use crate::middlewares::{CurrentUser, RequireAccess};
use crate::models::FormFields;
use crate::runtime::AppContext;
use crate::services::{AdminKind, AdminService};

pub async fn index(ctx: web::Data<AppContext>, user: CurrentUser) -> HttpResponse {
    let result = AdminService::new(&ctx).index(user.tutor());
    respond(&ctx, &user, result)
}

pub async fn list(
    ctx: web::Data<AppContext>,
    user: CurrentUser,
    kind: web::Path<String>,
) -> HttpResponse {
    let Ok(kind) = kind.parse::<AdminKind>() else {
        return not_found_page(&ctx, &user);
    };
    let result = AdminService::new(&ctx).list(kind, user.tutor()).await;
    respond(&ctx, &user, result)
}

pub async fn new_form(
    ctx: web::Data<AppContext>,
    user: CurrentUser,
    kind: web::Path<String>,
) -> HttpResponse {
    let Ok(kind) = kind.parse::<AdminKind>() else {
        return not_found_page(&ctx, &user);
    };
    let result = AdminService::new(&ctx)
        .edit_form(kind, None, user.tutor())
        .await;
    respond(&ctx, &user, result)
}

pub async fn edit_form(
    ctx: web::Data<AppContext>,
    user: CurrentUser,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (kind, id) = path.into_inner();
    let (Ok(kind), Ok(id)) = (kind.parse::<AdminKind>(), id.parse::<i64>()) else {
        return not_found_page(&ctx, &user);
    };
    let result = AdminService::new(&ctx)
        .edit_form(kind, Some(id), user.tutor())
        .await;
    respond(&ctx, &user, result)
}

pub async fn submit(
    ctx: web::Data<AppContext>,
    user: CurrentUser,
    kind: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> HttpResponse {
    let Ok(kind) = kind.parse::<AdminKind>() else {
        return not_found_page(&ctx, &user);
    };
    let fields = FormFields::new(form.into_inner());
    let result = AdminService::new(&ctx).submit(kind, fields).await;
    respond(&ctx, &user, result)
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(RequireAccess::superuser())
            .route("/", web::get().to(index))
            .route("/index.html", web::get().to(index))
            .route("/{kind}/", web::get().to(list))
            .route("/{kind}/", web::post().to(submit))
            .route("/{kind}/index.html", web::get().to(list))
            .route("/{kind}/new", web::get().to(new_form))
            .route("/{kind}/{id}", web::get().to(edit_form)),
    );
}
