pub mod assistant;
pub mod history;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::chat::requests::{QuickAssistantRequest, SendChatRequest};

pub struct ChatService;

impl ChatService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn history(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        history::history(self, request).await
    }

    // 发送消息给 AI 助手，双方消息都会持久化
    pub async fn send(&self, body: SendChatRequest, request: &HttpRequest) -> ActixResult<HttpResponse> {
        send::send(self, body, request).await
    }

    pub async fn clear_history(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        history::clear_history(self, request).await
    }

    // 无状态的浮动助手
    pub async fn quick_assistant(
        &self,
        body: QuickAssistantRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assistant::quick_assistant(self, body, request).await
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};
    use serde_json::json;

    use crate::ai::prompts::{
        ASSISTANT_ERROR_REPLY, CHAT_EMPTY_REPLY, CONNECTION_ERROR_REPLY, KACKAR_PROMPT,
        SYSTEM_PROMPT,
    };
    use crate::ai::testing::ScriptedGenerator;
    use crate::models::chat::ChatRole;
    use crate::models::users::UserRole;
    use crate::services::test_support::{TestContext, call_json, init_app};

    #[actix_web::test]
    async fn history_appends_in_order_with_context() {
        let scripted = ScriptedGenerator::new().reply("Merhaba!").reply("");
        let ctx = TestContext::with_generator(scripted).await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/chat/messages", &student)
                .set_json(json!({ "text": "Selam" }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["reply"]["text"], "Merhaba!");

        // 模型返回空文本时使用兜底回复，同样持久化
        let (_, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/chat/messages", &student)
                .set_json(json!({ "text": "Proje fikri?" }))
        );
        assert_eq!(body["data"]["reply"]["text"], CHAT_EMPTY_REPLY);

        let (_, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/chat/history", &student));
        let items = body["data"]["items"].as_array().unwrap();
        let texts: Vec<&str> = items.iter().filter_map(|m| m["text"].as_str()).collect();
        assert_eq!(texts, vec!["Selam", "Merhaba!", "Proje fikri?", CHAT_EMPTY_REPLY]);
        assert_eq!(items[1]["role"], "model");

        let recorded = ctx.scripted.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].system_instruction.as_deref(), Some(SYSTEM_PROMPT));
        // 第二次调用带上完整的历史
        let second = &recorded[1].contents;
        assert_eq!(second.len(), 3);
        assert_eq!(second[1].role, ChatRole::Model);
        assert_eq!(second[2].text, "Proje fikri?");
    }

    #[actix_web::test]
    async fn failed_reply_is_not_persisted() {
        let ctx = TestContext::with_generator(ScriptedGenerator::new().fail("timeout")).await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/chat/messages", &student)
                .set_json(json!({ "text": "Selam" }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["reply"]["text"], CONNECTION_ERROR_REPLY);
        assert!(body["data"]["reply"]["id"].is_null());

        let (_, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/chat/history", &student));
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["text"], "Selam");
    }

    #[actix_web::test]
    async fn blank_message_and_clear() {
        let ctx = TestContext::with_generator(ScriptedGenerator::new().reply("Tamam")).await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/chat/messages", &student)
                .set_json(json!({ "text": "   " }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 5000);
        assert!(ctx.scripted.recorded().is_empty());

        call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/chat/messages", &student)
                .set_json(json!({ "text": "Bir soru" }))
        );
        let (status, body) =
            call_json!(app, ctx.as_user(Method::DELETE, "/api/v1/chat/history", &student));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["deleted"], 2);
    }

    #[actix_web::test]
    async fn quick_assistant_uses_client_history() {
        let ctx = TestContext::with_generator(
            ScriptedGenerator::new().reply("Zirveden selamlar!").fail("down"),
        )
        .await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let payload = json!({
            "messages": [
                { "role": "model", "text": "Merhaba, ben Kaçkar." },
                { "role": "user", "text": "Teknofest nedir?" }
            ]
        });
        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/chat/assistant", &student).set_json(&payload)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["reply"], "Zirveden selamlar!");

        let (_, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/chat/assistant", &student).set_json(&payload)
        );
        assert_eq!(body["data"]["reply"], ASSISTANT_ERROR_REPLY);

        let recorded = ctx.scripted.recorded();
        assert_eq!(recorded[0].system_instruction.as_deref(), Some(KACKAR_PROMPT));
        assert_eq!(recorded[0].contents.len(), 2);

        // 浮动助手不写入对话记录
        let (_, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/chat/history", &student));
        assert!(body["data"]["items"].as_array().unwrap().is_empty());
    }
}
