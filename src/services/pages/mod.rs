//! 页面渲染
//!
//! 所有 HTML 响应都套用 layout.html，错误页也不例外。

pub mod home;
pub mod status;
pub mod tickets;

use actix_web::{
    HttpResponse,
    http::{StatusCode, header},
};
use tracing::error;

use crate::errors::Result;
use crate::models::tutors::entities::Tutor;
use crate::render::{PageContext, Templates, html::escape};
use crate::runtime::AppContext;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// 顶部导航，根据登录身份显示不同链接
fn navigation(user: Option<&Tutor>) -> String {
    let mut nav = String::from(r#"<a href="/">Home</a><a href="/status.html">Status</a>"#);
    match user {
        Some(tutor) => {
            if tutor.is_superuser {
                nav.push_str(r#"<a href="/admin/">Admin</a>"#);
            }
            nav.push_str(&format!(
                r#"<span class="user">{}</span><a href="/logout/">Log out</a>"#,
                escape(&tutor.email)
            ));
        }
        None => nav.push_str(r#"<a href="/login/">Log in</a>"#),
    }
    nav
}

/// 渲染正文模板并套用布局
pub fn render_page(
    templates: &Templates,
    title: &str,
    body: &str,
    context: &PageContext,
    user: Option<&Tutor>,
) -> Result<String> {
    let content = templates.render(body, context)?;
    let layout = PageContext::new()
        .with("title", title)
        .with("system_name", templates.system_name())
        .with_html("nav", navigation(user))
        .with_html("content", content);
    templates.render("layout.html", &layout)
}

pub fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(HTML_CONTENT_TYPE)
        .body(body)
}

/// 渲染完整页面并返回 200 响应
pub fn page(
    ctx: &AppContext,
    title: &str,
    body: &str,
    context: &PageContext,
    user: Option<&Tutor>,
) -> Result<HttpResponse> {
    let html = render_page(&ctx.templates, title, body, context, user)?;
    Ok(html_response(StatusCode::OK, html))
}

/// 302 跳转
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 错误页，标题形如 "404: Not Found"
pub fn error_page(
    templates: &Templates,
    status: StatusCode,
    message: &str,
    user: Option<&Tutor>,
) -> HttpResponse {
    let title = format!(
        "{}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let context = PageContext::new().with("message", message);

    match render_page(templates, &title, "error.html", &context, user) {
        Ok(html) => html_response(status, html),
        Err(e) => {
            // 模板本身出错时退回纯文本
            error!("Failed to render error page: {}", e);
            HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(format!("{title}\n\n{message}"))
        }
    }
}

pub struct PageService<'a> {
    ctx: &'a AppContext,
}

impl<'a> PageService<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    // 首页
    pub fn home(&self, user: Option<&Tutor>) -> Result<HttpResponse> {
        home::handle_home(self.ctx, user)
    }

    // 辅导状态页
    pub async fn status(&self, user: Option<&Tutor>) -> Result<HttpResponse> {
        status::handle_status(self.ctx, user).await
    }

    // 提交工单（尚未开放）
    pub fn open_ticket(&self) -> HttpResponse {
        tickets::handle_open_ticket()
    }

    // 关闭工单（尚未开放）
    pub fn close_ticket(&self, ticket_id: &str) -> HttpResponse {
        tickets::handle_close_ticket(ticket_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn tutor(is_superuser: bool) -> Tutor {
        Tutor {
            id: 1,
            email: "jdoe@unomaha.edu".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            is_active: true,
            is_superuser,
        }
    }

    #[test]
    fn test_navigation_depends_on_identity() {
        assert!(navigation(None).contains("/login/"));
        assert!(!navigation(Some(&tutor(false))).contains("/admin/"));
        let nav = navigation(Some(&tutor(true)));
        assert!(nav.contains("/admin/"));
        assert!(nav.contains("/logout/"));
        assert!(nav.contains("jdoe@unomaha.edu"));
    }

    #[test]
    fn test_error_page_title_and_message() {
        let response = error_page(
            &Templates::embedded(),
            StatusCode::NOT_FOUND,
            "We couldn't find the page you were looking for.",
            None,
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().try_into_bytes().unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("404: Not Found"));
        assert!(html.contains("We couldn&#x27;t find the page you were looking for."));
    }
}
