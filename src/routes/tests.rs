use std::sync::Arc;

use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::{
    App, HttpResponse,
    body::MessageBody,
    cookie::{Cookie, Key},
    dev::ServiceResponse,
    http::{StatusCode, header},
    test, web,
};
use serde_json::json;

use super::{configure_routes, not_found};
use crate::config::{AppConfig, Cli};
use crate::middlewares::LoadUser;
use crate::models::tutors::requests::TutorForm;
use crate::runtime::AppContext;
use crate::services::auth::SESSION_IDENTITY_KEY;
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};

async fn context(debug: bool) -> web::Data<AppContext> {
    let cli = Cli {
        debug,
        ..Default::default()
    };
    let config = AppConfig::load(&cli).unwrap();
    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await.unwrap());
    web::Data::new(AppContext::new(&config, storage))
}

// 测试专用：直接写入会话身份
async fn test_login(session: Session, email: web::Path<String>) -> HttpResponse {
    session
        .insert(SESSION_IDENTITY_KEY, email.into_inner())
        .unwrap();
    HttpResponse::Ok().finish()
}

macro_rules! portal_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data($ctx.clone())
                .configure(configure_routes)
                .route("/test-login/{email}", web::get().to(test_login))
                .default_service(web::to(not_found))
                .wrap(LoadUser)
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                        .cookie_secure(false)
                        .build(),
                ),
        )
        .await
    };
}

macro_rules! get {
    ($app:expr, $uri:expr) => {
        test::call_service(&$app, test::TestRequest::get().uri($uri).to_request()).await
    };
    ($app:expr, $uri:expr, $cookie:expr) => {
        test::call_service(
            &$app,
            test::TestRequest::get()
                .uri($uri)
                .cookie($cookie.clone())
                .to_request(),
        )
        .await
    };
}

macro_rules! post_form {
    ($app:expr, $uri:expr, $cookie:expr, $form:expr) => {
        test::call_service(
            &$app,
            test::TestRequest::post()
                .uri($uri)
                .cookie($cookie.clone())
                .set_form($form)
                .to_request(),
        )
        .await
    };
}

fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
        .expect("session cookie")
}

fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

fn tutor_form(email: &str, is_active: bool) -> TutorForm {
    TutorForm {
        email: email.into(),
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        is_active,
        is_superuser: false,
        course_ids: vec![],
    }
}

#[actix_web::test]
async fn test_public_pages() {
    let ctx = context(false).await;
    let app = portal_app!(ctx);

    for uri in ["/", "/index.html", "/status.html"] {
        let resp = get!(app, uri);
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let html = body_text(resp).await;
        assert!(html.contains(r#"href="/login/""#));
        assert!(!html.contains(r#"href="/admin/""#));
    }

    let resp = get!(app, "/status.html");
    assert!(!body_text(resp).await.contains("Open tickets"));
}

#[actix_web::test]
async fn test_unknown_path_renders_not_found_page() {
    let ctx = context(false).await;
    let app = portal_app!(ctx);

    let resp = get!(app, "/no/such/page");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("404: Not Found"));

    let resp = get!(app, "/static/missing.css");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_static_assets() {
    let ctx = context(false).await;
    let app = portal_app!(ctx);

    let resp = get!(app, "/static/css/portal.css");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css; charset=utf-8"
    );

    let resp = get!(app, "/favicon.ico");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_login_redirects_to_sso_without_debug() {
    let ctx = context(false).await;
    let app = portal_app!(ctx);

    let resp = get!(app, "/login/");
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), ctx.auth.sso_url);
}

#[actix_web::test]
async fn test_anonymous_visitor_is_forbidden() {
    let ctx = context(false).await;
    let app = portal_app!(ctx);

    for uri in ["/admin/", "/admin/semesters/", "/tickets.json", "/close_ticket/3"] {
        let resp = get!(app, uri);
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    let resp = get!(app, "/availability.json");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "d": [] }));
}

#[actix_web::test]
async fn test_tutor_without_superuser_flag() {
    let ctx = context(false).await;
    ctx.storage
        .edit_tutor(tutor_form("tutor@unomaha.edu", true), None)
        .await
        .unwrap();
    let app = portal_app!(ctx);

    let resp = get!(app, "/test-login/tutor@unomaha.edu");
    let cookie = session_cookie(&resp);

    let resp = get!(app, "/admin/", cookie);
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = get!(app, "/tickets.json", cookie);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "d": [] }));

    let resp = get!(app, "/status.html", cookie);
    let html = body_text(resp).await;
    assert!(html.contains("Open tickets"));
    assert!(html.contains("tutor@unomaha.edu"));

    let resp = get!(app, "/close_ticket/3", cookie);
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");
}

#[actix_web::test]
async fn test_inactive_or_unknown_identity_is_anonymous() {
    let ctx = context(false).await;
    ctx.storage
        .edit_tutor(tutor_form("former@unomaha.edu", false), None)
        .await
        .unwrap();
    let app = portal_app!(ctx);

    for email in ["former@unomaha.edu", "ghost@unomaha.edu"] {
        let resp = get!(app, &format!("/test-login/{email}"));
        let cookie = session_cookie(&resp);
        let resp = get!(app, "/tickets.json", cookie);
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{email}");
    }
}

fn superuser_form(email: &str) -> TutorForm {
    TutorForm {
        is_superuser: true,
        ..tutor_form(email, true)
    }
}

const SPRING_2024: [(&str, &str); 4] = [
    ("year", "2024"),
    ("season", "1"),
    ("start_date", "2024-01-10"),
    ("end_date", "2024-05-10"),
];

#[actix_web::test]
async fn test_stored_superuser_manages_semesters() {
    let ctx = context(false).await;
    ctx.storage
        .edit_tutor(superuser_form("admin@unomaha.edu"), None)
        .await
        .unwrap();
    let app = portal_app!(ctx);

    // 会话里的大小写与存储不同也能识别
    let resp = get!(app, "/test-login/Admin@UNOmaha.edu");
    let cookie = session_cookie(&resp);

    let resp = get!(app, "/admin/", cookie);
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("admin@unomaha.edu"));

    let mut form = vec![("id", ""), ("action", "save")];
    form.extend(SPRING_2024);
    let resp = post_form!(app, "/admin/semesters/", cookie, &form);
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/admin/semesters/");

    let resp = get!(app, "/admin/semesters/", cookie);
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Spring 2024"));

    let resp = post_form!(
        app,
        "/admin/semesters/",
        cookie,
        &[("id", "999"), ("action", "delete")]
    );
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/admin/semesters/");
    assert_eq!(ctx.storage.list_semesters().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_malformed_id_is_bad_request() {
    let ctx = context(false).await;
    ctx.storage
        .edit_tutor(superuser_form("admin@unomaha.edu"), None)
        .await
        .unwrap();
    let app = portal_app!(ctx);
    let resp = get!(app, "/test-login/admin@unomaha.edu");
    let cookie = session_cookie(&resp);

    let mut form = vec![("id", "7x"), ("action", "save")];
    form.extend(SPRING_2024);
    let resp = post_form!(app, "/admin/semesters/", cookie, &form);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.storage.list_semesters().await.unwrap().is_empty());

    let resp = post_form!(
        app,
        "/admin/semesters/",
        cookie,
        &[("id", "7x"), ("action", "delete")]
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_error_page_keeps_signed_in_navigation() {
    let ctx = context(false).await;
    ctx.storage
        .edit_tutor(superuser_form("admin@unomaha.edu"), None)
        .await
        .unwrap();
    let app = portal_app!(ctx);
    let resp = get!(app, "/test-login/admin@unomaha.edu");
    let cookie = session_cookie(&resp);

    let resp = post_form!(
        app,
        "/admin/semesters/",
        cookie,
        &[("year", "2024"), ("season", "9")]
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let html = body_text(resp).await;
    assert!(html.contains("admin@unomaha.edu"));
    assert!(html.contains(r#"href="/admin/""#));

    let resp = get!(app, "/admin/semesters/99", cookie);
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(resp).await.contains("admin@unomaha.edu"));
}

#[cfg(debug_assertions)]
mod debug_identity {
    use super::*;

    macro_rules! debug_login {
        ($app:expr) => {{
            let resp = get!($app, "/login/");
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(location(&resp), "/");
            session_cookie(&resp)
        }};
    }

    #[actix_web::test]
    async fn test_debug_login_grants_admin() {
        let ctx = context(true).await;
        let app = portal_app!(ctx);
        let cookie = debug_login!(app);

        let resp = get!(app, "/admin/", cookie);
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains(&ctx.auth.debug_email));
        assert!(html.contains("/admin/problems/"));

        let resp = get!(app, "/logout/", cookie);
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/");
    }

    #[actix_web::test]
    async fn test_semester_create_edit_delete() {
        let ctx = context(true).await;
        let app = portal_app!(ctx);
        let cookie = debug_login!(app);

        let resp = post_form!(
            app,
            "/admin/semesters/",
            cookie,
            &[
                ("id", ""),
                ("action", "save"),
                ("year", "2024"),
                ("season", "1"),
                ("start_date", "2024-01-10"),
                ("end_date", "2024-05-10"),
            ]
        );
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/admin/semesters/");

        let semesters = ctx.storage.list_semesters().await.unwrap();
        assert_eq!(semesters.len(), 1);
        let id = semesters[0].id.to_string();

        let resp = get!(app, "/admin/semesters/", cookie);
        let html = body_text(resp).await;
        assert!(html.contains("Spring 2024"));
        assert!(html.contains(&format!("/admin/semesters/{id}")));

        let resp = get!(app, &format!("/admin/semesters/{id}"), cookie);
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("2024-01-10"));
        assert!(html.contains(r#"value="delete""#));

        let resp = post_form!(
            app,
            "/admin/semesters/",
            cookie,
            &[
                ("id", id.as_str()),
                ("action", "save"),
                ("year", "2025"),
                ("season", "1"),
                ("start_date", "2024-01-10"),
                ("end_date", "2024-05-10"),
            ]
        );
        assert_eq!(resp.status(), StatusCode::FOUND);
        let semesters = ctx.storage.list_semesters().await.unwrap();
        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].year, 2025);

        let resp = post_form!(
            app,
            "/admin/semesters/",
            cookie,
            &[("id", id.as_str()), ("action", "delete")]
        );
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert!(ctx.storage.list_semesters().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_new_forms_render() {
        let ctx = context(true).await;
        let app = portal_app!(ctx);
        let cookie = debug_login!(app);

        for kind in ["semesters", "professors", "courses", "sections", "tutors", "problems"] {
            let resp = get!(app, &format!("/admin/{kind}/new"), cookie);
            assert_eq!(resp.status(), StatusCode::OK, "{kind}");
            let html = body_text(resp).await;
            assert!(!html.contains(r#"value="delete""#), "{kind}");

            let resp = get!(app, &format!("/admin/{kind}/"), cookie);
            assert_eq!(resp.status(), StatusCode::OK, "{kind}");
        }
    }

    #[actix_web::test]
    async fn test_invalid_submission_is_bad_request() {
        let ctx = context(true).await;
        let app = portal_app!(ctx);
        let cookie = debug_login!(app);

        let resp = post_form!(
            app,
            "/admin/semesters/",
            cookie,
            &[
                ("year", "2024"),
                ("season", "3"),
                ("start_date", "2024-12-10"),
                ("end_date", "2024-08-20"),
            ]
        );
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(ctx.storage.list_semesters().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_admin_lookup_errors() {
        let ctx = context(true).await;
        let app = portal_app!(ctx);
        let cookie = debug_login!(app);

        let resp = get!(app, "/admin/users/", cookie);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = get!(app, "/admin/semesters/abc", cookie);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = get!(app, "/admin/semesters/99", cookie);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_tutor_form_saves_courses() {
        let ctx = context(true).await;
        let app = portal_app!(ctx);
        let cookie = debug_login!(app);

        let resp = post_form!(
            app,
            "/admin/courses/",
            cookie,
            &[
                ("number", "CSCI 1620"),
                ("name", "Introduction to Computer Science II"),
                ("on_display", "on"),
            ]
        );
        assert_eq!(resp.status(), StatusCode::FOUND);
        let course_id = ctx.storage.list_courses().await.unwrap()[0].id;

        let course_field = format!("course_{course_id}");
        let resp = post_form!(
            app,
            "/admin/tutors/",
            cookie,
            &[
                ("email", "New.Tutor@unomaha.edu"),
                ("first_name", "New"),
                ("last_name", "Tutor"),
                ("is_active", "on"),
                (course_field.as_str(), "on"),
            ]
        );
        assert_eq!(resp.status(), StatusCode::FOUND);

        let tutors = ctx.storage.list_tutors().await.unwrap();
        assert_eq!(tutors.len(), 1);
        assert_eq!(tutors[0].email, "new.tutor@unomaha.edu");
        assert!(!tutors[0].is_superuser);
        assert_eq!(
            ctx.storage.list_tutor_courses(tutors[0].id).await.unwrap(),
            vec![course_id]
        );

        let resp = get!(app, &format!("/admin/tutors/{}", tutors[0].id), cookie);
        let html = body_text(resp).await;
        assert!(html.contains(&format!(r#"name="{course_field}" checked"#)));
    }
}
