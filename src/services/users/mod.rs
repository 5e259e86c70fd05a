pub mod delete;
pub mod list;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::UserListParams;

pub struct UserService;

impl UserService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 获取用户列表
    pub async fn list_users(
        &self,
        query: UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, query, request).await
    }

    // 各角色用户数量
    pub async fn user_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::user_stats(self, request).await
    }

    // 删除用户（级联删除其数据）
    pub async fn delete_user(
        &self,
        username: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, username, request).await
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};

    use crate::models::users::UserRole;
    use crate::services::test_support::{TestContext, call_json, init_app};

    #[actix_web::test]
    async fn admin_lists_and_filters_users() {
        let ctx = TestContext::new().await;
        let admin = ctx.seed_user("yonetici", "1234", UserRole::Admin, None).await;
        ctx.seed_user("hoca", "1234", UserRole::Teacher, None).await;
        ctx.seed_user("ali", "1234", UserRole::Student, Some("hoca")).await;
        ctx.seed_user("veli", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let (status, body) =
            call_json!(app, ctx.as_user(Method::GET, "/api/v1/users?page=1&size=20", &admin));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["pagination"]["total"], 4);

        let (_, body) =
            call_json!(app, ctx.as_user(Method::GET, "/api/v1/users?role=STUDENT", &admin));
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);

        let (_, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/users?search=hoca", &admin));
        // 用户名或指导教师匹配
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn stats_count_users_per_role() {
        let ctx = TestContext::new().await;
        let admin = ctx.seed_user("yonetici", "1234", UserRole::Admin, None).await;
        let teacher = ctx.seed_user("hoca", "1234", UserRole::Teacher, None).await;
        ctx.seed_user("ali", "1234", UserRole::Student, Some("hoca")).await;
        ctx.seed_user("gülşen", "1234", UserRole::Student, Some("hoca")).await;
        let app = init_app!(ctx);

        let (status, body) =
            call_json!(app, ctx.as_user(Method::GET, "/api/v1/users/stats", &admin));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 4);
        assert_eq!(body["data"]["students"], 2);
        assert_eq!(body["data"]["teachers"], 1);
        assert_eq!(body["data"]["admins"], 1);

        // 删除后计数随之变化，用户名按 UTF-8 百分号编码
        let (status, _) = call_json!(
            app,
            ctx.as_user(Method::DELETE, "/api/v1/users/g%C3%BCl%C5%9Fen", &admin)
        );
        assert_eq!(status, StatusCode::OK);
        let (_, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/users/stats", &admin));
        assert_eq!(body["data"]["students"], 1);
        assert_eq!(body["data"]["total"], 3);

        let (status, _) =
            call_json!(app, ctx.as_user(Method::GET, "/api/v1/users/stats", &teacher));
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn non_admin_cannot_list_users() {
        let ctx = TestContext::new().await;
        let teacher = ctx.seed_user("hoca", "1234", UserRole::Teacher, None).await;
        let app = init_app!(ctx);

        let (status, _) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/users", &teacher));
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn delete_removes_user_but_not_self() {
        let ctx = TestContext::new().await;
        let admin = ctx.seed_user("yonetici", "1234", UserRole::Admin, None).await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let (status, body) =
            call_json!(app, ctx.as_user(Method::DELETE, "/api/v1/users/yonetici", &admin));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Kendi hesabınızı silemezsiniz.");

        let (status, _) = call_json!(app, ctx.as_user(Method::DELETE, "/api/v1/users/ali", &admin));
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/users", &admin));
        let names: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|u| u["username"].as_str())
            .collect();
        assert_eq!(names, vec!["yonetici"]);

        // 已删除用户的令牌失效
        let (status, _) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/auth/me", &student));
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = call_json!(app, ctx.as_user(Method::DELETE, "/api/v1/users/ali", &admin));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
