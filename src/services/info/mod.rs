use actix_web::{HttpResponse, Result as ActixResult};

use crate::catalog::info;
use crate::models::ApiResponse;

/// 静态信息面板：比赛类别、研究工具、申请指南
pub struct InfoService;

impl InfoService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn categories(&self) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::Ok().json(ApiResponse::success(info::categories(), "Kategoriler alındı.")))
    }

    pub async fn research_tools(&self) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            info::research_tools(),
            "Araştırma araçları alındı.",
        )))
    }

    pub async fn guide(&self) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::Ok().json(ApiResponse::success(info::guide(), "Rehber alındı.")))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};

    use crate::models::users::UserRole;
    use crate::services::test_support::{TestContext, call_json, init_app};

    #[actix_web::test]
    async fn info_panels_need_login() {
        let ctx = TestContext::new().await;
        let teacher = ctx.seed_user("hoca", "1234", UserRole::Teacher, None).await;
        let app = init_app!(ctx);

        let (status, _) = call_json!(app, ctx.request(Method::GET, "/api/v1/info/categories"));
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) =
            call_json!(app, ctx.as_user(Method::GET, "/api/v1/info/categories", &teacher));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);

        let (_, body) =
            call_json!(app, ctx.as_user(Method::GET, "/api/v1/info/research-tools", &teacher));
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert!(names.contains(&"NotebookLM"));

        let (status, _) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/info/guide", &teacher));
        assert_eq!(status, StatusCode::OK);
    }
}
