/*!
 * 访问控制中间件
 *
 * 依赖 `LoadUser` 写入的 `CurrentUser`，因此必须在其内层使用。
 * 未登录或权限不足时统一返回 403 错误页。
 *
 * ```rust,ignore
 * web::scope("/admin")
 *     .wrap(RequireAccess::superuser())
 *     .route("/", web::get().to(admin_index))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use super::CurrentUser;
use crate::errors::FORBIDDEN_MESSAGE;
use crate::render::Templates;
use crate::runtime::AppContext;
use crate::services::pages::error_page;

#[derive(Debug, Clone, Copy)]
pub struct RequireAccess {
    superuser: bool,
}

impl RequireAccess {
    /// 任何在职辅导员
    pub fn logged_in() -> Self {
        Self { superuser: false }
    }

    /// 仅管理员
    pub fn superuser() -> Self {
        Self { superuser: true }
    }

    fn allows(&self, user: &CurrentUser) -> bool {
        match user.tutor() {
            Some(tutor) => !self.superuser || tutor.is_superuser,
            None => false,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAccess
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAccessMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAccessMiddleware {
            service: Rc::new(service),
            access: *self,
        }))
    }
}

pub struct RequireAccessMiddleware<S> {
    service: Rc<S>,
    access: RequireAccess,
}

impl<S, B> Service<ServiceRequest> for RequireAccessMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let access = self.access;

        Box::pin(async move {
            let user = CurrentUser::from_extensions(&req);

            if access.allows(&user) {
                let res = srv.call(req).await?.map_into_left_body();
                return Ok(res);
            }

            info!(
                "Access denied for {} on {} (superuser required: {})",
                user.tutor().map_or("anonymous", |t| t.email.as_str()),
                req.path(),
                access.superuser
            );

            let response = match req.app_data::<web::Data<AppContext>>() {
                Some(ctx) => error_page(
                    &ctx.templates,
                    StatusCode::FORBIDDEN,
                    FORBIDDEN_MESSAGE,
                    user.tutor(),
                ),
                None => error_page(
                    &Templates::embedded(),
                    StatusCode::FORBIDDEN,
                    FORBIDDEN_MESSAGE,
                    user.tutor(),
                ),
            };
            Ok(req.into_response(response.map_into_right_body()))
        })
    }
}
