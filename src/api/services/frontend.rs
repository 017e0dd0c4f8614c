use actix_web::{HttpRequest, HttpResponse, Result, web};
use rust_embed::Embed;
use tracing::{debug, trace};

// 编译时嵌入页面与脚本
#[derive(Embed)]
#[folder = "assets/"]
struct FrontendAssets;

pub struct FrontendService;

impl FrontendService {
    /// 看板首页
    pub async fn handle_index(_req: HttpRequest) -> Result<HttpResponse> {
        trace!("Serving dashboard index page");

        let config = crate::config::get_config();
        match FrontendAssets::get("index.html") {
            Some(content) => {
                let html_content = String::from_utf8_lossy(&content.data);
                let processed_html = html_content
                    .replace("%DASHBOARD_TITLE%", &config.dashboard.title)
                    .replace("%DASHBOARD_VERSION%", env!("CARGO_PKG_VERSION"));

                Ok(HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(processed_html))
            }
            None => {
                debug!("index.html missing from embedded assets");
                Ok(HttpResponse::NotFound().body("Dashboard page not found"))
            }
        }
    }

    /// 静态资源
    pub async fn handle_static(req: HttpRequest) -> Result<HttpResponse> {
        let path = req.match_info().query("path");
        trace!("Serving static file: {}", path);

        let content_type = Self::get_content_type(path);
        match FrontendAssets::get(&format!("static/{}", path)) {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type(content_type)
                .body(content.data.into_owned())),
            None => {
                debug!("Static file not found: {}", path);
                Ok(HttpResponse::NotFound().body("File not found"))
            }
        }
    }

    pub async fn handle_favicon(_req: HttpRequest) -> Result<HttpResponse> {
        Ok(HttpResponse::NoContent().finish())
    }

    fn get_content_type(path: &str) -> &'static str {
        match path.split('.').next_back() {
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("svg") => "image/svg+xml",
            Some("png") => "image/png",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }
}

/// 页面路由配置
pub fn frontend_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(FrontendService::handle_index))
        .route("/", web::head().to(FrontendService::handle_index))
        .route("/favicon.ico", web::get().to(FrontendService::handle_favicon))
        .route(
            "/static/{path:.*}",
            web::get().to(FrontendService::handle_static),
        )
}
