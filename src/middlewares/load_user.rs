/*!
 * 会话身份加载中间件
 *
 * 每个请求都会经过此中间件：从会话中读取登录邮箱，查询对应的辅导员，
 * 结果以 `CurrentUser` 存入请求扩展。匿名访问时 `CurrentUser` 为空。
 *
 * 必须包在 `SessionMiddleware` 之内。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * App::new()
 *     .wrap(LoadUser)
 *     .wrap(SessionMiddleware::new(CookieSessionStore::default(), key))
 *     .route("/", web::get().to(handler));
 *
 * async fn handler(user: CurrentUser) -> HttpResponse {
 *     match user.tutor() {
 *         Some(tutor) => HttpResponse::Ok().body(tutor.email.clone()),
 *         None => HttpResponse::Ok().body("anonymous"),
 *     }
 * }
 * ```
 */

use actix_service::{Service, Transform};
use actix_session::SessionExt;
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
    body::EitherBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::error;

use crate::models::tutors::entities::Tutor;
use crate::runtime::AppContext;
use crate::services::auth::authenticate;

/// 当前请求的登录身份
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<Tutor>);

impl CurrentUser {
    pub fn tutor(&self) -> Option<&Tutor> {
        self.0.as_ref()
    }

    /// 从请求扩展中读取，未经过 `LoadUser` 时视为匿名
    pub fn from_extensions(req: &impl HttpMessage) -> Self {
        req.extensions()
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default()
    }
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(CurrentUser::from_extensions(req)))
    }
}

#[derive(Clone)]
pub struct LoadUser;

impl<S, B> Transform<S, ServiceRequest> for LoadUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = LoadUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoadUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct LoadUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoadUserMiddleware<S>
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

        Box::pin(async move {
            let Some(ctx) = req.app_data::<web::Data<AppContext>>().cloned() else {
                error!("AppContext is missing from app data");
                return Ok(req.into_response(
                    HttpResponse::InternalServerError()
                        .finish()
                        .map_into_right_body(),
                ));
            };

            let session = req.get_session();
            match authenticate(&session, ctx.storage.as_ref(), &ctx.auth).await {
                Ok(user) => {
                    req.extensions_mut().insert(CurrentUser(user));
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(e) => Ok(req.into_response(e.error_response().map_into_right_body())),
            }
        })
    }
}
