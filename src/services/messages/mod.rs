pub mod inbox;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::messages::requests::SendMessageRequest;

pub struct MessageService;

impl MessageService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn send_message(
        &self,
        body: SendMessageRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_message(self, body, request).await
    }

    // 收到的留言，最新的在前
    pub async fn inbox(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        inbox::inbox(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};
    use serde_json::json;

    use crate::models::users::UserRole;
    use crate::services::test_support::{TestContext, call_json, init_app};

    #[actix_web::test]
    async fn inbox_lists_newest_first() {
        let ctx = TestContext::new().await;
        let teacher = ctx.seed_user("hoca", "1234", UserRole::Teacher, None).await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, Some("hoca")).await;
        let app = init_app!(ctx);

        for text in ["ilk", "ikinci"] {
            let (status, _) = call_json!(
                app,
                ctx.as_user(Method::POST, "/api/v1/messages", &student)
                    .set_json(json!({ "to_username": "hoca", "text": text }))
            );
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/messages", &teacher));
        assert_eq!(status, StatusCode::OK);
        let texts: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|m| m["text"].as_str())
            .collect();
        assert_eq!(texts, vec!["ikinci", "ilk"]);

        // 发送方自己的收件箱为空
        let (_, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/messages", &student));
        assert!(body["data"]["items"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn send_validates_recipient_and_text() {
        let ctx = TestContext::new().await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        ctx.seed_user("hoca", "1234", UserRole::Teacher, None).await;
        let app = init_app!(ctx);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/messages", &student)
                .set_json(json!({ "to_username": "yok", "text": "merhaba" }))
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 6001);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/messages", &student)
                .set_json(json!({ "to_username": "hoca", "text": "  " }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 6000);
    }
}
