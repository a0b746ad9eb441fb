//! 静态资源路由
//!
//! 使用 rust-embed 嵌入 static/ 目录，支持：
//! - 开发模式（`--reload`）下优先读取磁盘上的 ./static 目录
//! - 按扩展名设置 MIME 类型和缓存头
//! - /favicon.ico

use actix_web::{HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use super::not_found_page;
use crate::middlewares::CurrentUser;
use crate::runtime::AppContext;

/// 嵌入静态资源
/// 编译时从 static/ 目录读取文件
#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

const STATIC_DIR: &str = "./static";
const FAVICON_PATH: &str = "images/favicon.ico";

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "ts" => "text/plain; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" => "text/plain; charset=utf-8",
        "map" => "application/json",
        _ => "application/octet-stream",
    }
}

/// 检查是否应该设置缓存
fn should_cache(path: &str) -> bool {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    // 图片和字体很少变化，脚本和样式随部署更新
    matches!(
        ext,
        "ico" | "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "woff" | "woff2" | "ttf"
    )
}

/// 请求路径不允许跳出资源目录
fn is_safe_path(path: &str) -> bool {
    !path.is_empty() && !path.split('/').any(|part| part == ".." || part.is_empty())
}

/// 尝试从磁盘读取文件（开发用）
fn try_custom_file(path: &str) -> Option<Vec<u8>> {
    std::fs::read(format!("{STATIC_DIR}/{path}")).ok()
}

/// 尝试从嵌入的资源中获取文件
fn get_embedded_file(path: &str) -> Option<Vec<u8>> {
    StaticAssets::get(path).map(|f| f.data.to_vec())
}

/// 获取文件内容（开发模式优先磁盘，然后嵌入资源）
fn get_file(path: &str, reload: bool) -> Option<Vec<u8>> {
    if !is_safe_path(path) {
        return None;
    }
    if reload && let Some(data) = try_custom_file(path) {
        return Some(data);
    }
    get_embedded_file(path)
}

fn file_response(path: &str, data: Vec<u8>) -> HttpResponse {
    let mut response = HttpResponse::Ok();
    response.content_type(get_mime_type(path));

    // 设置缓存头
    if should_cache(path) {
        response.insert_header(("Cache-Control", "public, max-age=86400"));
    } else {
        response.insert_header(("Cache-Control", "no-cache"));
    }

    response.body(data)
}

/// 静态资源请求处理
pub async fn serve_static(
    ctx: web::Data<AppContext>,
    user: CurrentUser,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let path = path.trim_start_matches('/');
    match get_file(path, ctx.templates.reload()) {
        Some(data) => Ok(file_response(path, data)),
        None => Ok(not_found_page(&ctx, &user)),
    }
}

pub async fn favicon(ctx: web::Data<AppContext>, user: CurrentUser) -> ActixResult<HttpResponse> {
    match get_file(FAVICON_PATH, ctx.templates.reload()) {
        Some(data) => Ok(file_response(FAVICON_PATH, data)),
        None => Ok(not_found_page(&ctx, &user)),
    }
}

/// 配置静态资源路由
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/static/{path:.*}", web::get().to(serve_static))
        .route("/favicon.ico", web::get().to(favicon));
}
