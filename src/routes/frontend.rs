//! 单页应用静态资源
//!
//! 构建产物通过 rust-embed 编译进二进制，未匹配的路径回退到 `index.html`，
//! 由前端路由处理。未知的 `/api/` 路径返回统一的 404 响应。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

const INDEX_FILE: &str = "index.html";

fn extension(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

fn mime_type(path: &str) -> &'static str {
    match extension(path) {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "webmanifest" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "txt" => "text/plain; charset=utf-8",
        "map" => "application/json",
        _ => "application/octet-stream",
    }
}

/// 带 hash 的构建产物可以长期缓存，HTML 不缓存
fn is_immutable(path: &str) -> bool {
    matches!(
        extension(path),
        "js" | "css" | "woff" | "woff2" | "ttf" | "png" | "jpg" | "jpeg" | "svg" | "webp"
    )
}

// 系统名称写入页面标题
fn render_index(content: &[u8], system_name: &str) -> Vec<u8> {
    String::from_utf8_lossy(content)
        .replace("%APP_TITLE%", system_name)
        .into_bytes()
}

fn asset(path: &str) -> Option<Vec<u8>> {
    FrontendAssets::get(path).map(|file| file.data.to_vec())
}

pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    if path == "api" || path.starts_with("api/") {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "İstenen kaynak bulunamadı.",
        )));
    }

    let (content, file_path) = match asset(path) {
        Some(content) if !path.is_empty() => (Some(content), path),
        _ => (asset(INDEX_FILE), INDEX_FILE),
    };

    let Some(mut data) = content else {
        return Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Arayüz dosyaları bulunamadı."));
    };

    let mime = mime_type(file_path);
    if file_path == INDEX_FILE {
        data = render_index(&data, &AppConfig::get().app.system_name);
    }

    let cache_control = if is_immutable(file_path) {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache, no-store, must-revalidate"
    };

    Ok(HttpResponse::Ok()
        .content_type(mime)
        .insert_header(("Cache-Control", cache_control))
        .body(data))
}

/// 所有非 API 路由交给前端处理，须最后注册
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service};

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(mime_type("assets/app.mjs"), "application/javascript; charset=utf-8");
        assert_eq!(mime_type("logo.png"), "image/png");
        assert_eq!(mime_type("rapor.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_immutable_assets() {
        assert!(is_immutable("assets/index-3f2a.js"));
        assert!(!is_immutable("index.html"));
        assert!(!is_immutable("manifest.json"));
    }

    #[test]
    fn test_render_index_sets_title() {
        let html = render_index(b"<title>%APP_TITLE%</title>", "Proje Asistani");
        assert_eq!(html, b"<title>Proje Asistani</title>");
    }

    #[actix_web::test]
    async fn unknown_api_path_is_not_spa() {
        let app = init_service(actix_web::App::new().configure(configure_frontend_routes)).await;

        let resp = call_service(&app, TestRequest::get().uri("/api/v1/yok").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // build.rs 保证 index.html 存在
        let resp = call_service(&app, TestRequest::get().uri("/ogrenci/panel").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
