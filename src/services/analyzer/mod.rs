pub mod extract;
pub mod process;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::analyzer::requests::ProcessDocumentRequest;

pub struct AnalyzerService;

impl AnalyzerService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 上传 PDF / DOCX 并提取纯文本，文件不落盘
    pub async fn extract(&self, request: &HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
        extract::handle_extract(self, request, payload).await
    }

    pub async fn process(
        &self,
        body: ProcessDocumentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        process::process_document(self, body, request).await
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode, header};
    use serde_json::json;

    use crate::ai::ModelTier;
    use crate::ai::prompts::{ANALYSIS_EMPTY_REPLY, CONNECTION_ERROR_REPLY, PROJECT_TEXT_MARKER};
    use crate::ai::testing::ScriptedGenerator;
    use crate::documents::docx;
    use crate::models::exports::TeamMember;
    use crate::models::users::UserRole;
    use crate::services::test_support::{TestContext, call_json, init_app};

    const BOUNDARY: &str = "----teknofest-test-boundary";

    fn multipart_body(file_name: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn content_type() -> (header::HeaderName, String) {
        (header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
    }

    #[actix_web::test]
    async fn extracts_text_from_docx() {
        let ctx = TestContext::new().await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let members = vec![TeamMember {
            name: "Ayşe".into(),
            role: "Kaptan".into(),
            class: "10-A".into(),
        }];
        let bytes = docx::team_file("Rize Tekno", "Heyelan erken uyarı", &members).unwrap();

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/analyzer/extract", &student)
                .insert_header(content_type())
                .set_payload(multipart_body("takim.docx", &bytes))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["file_name"], "takim.docx");
        let text = body["data"]["text"].as_str().unwrap();
        assert!(text.contains("Heyelan erken uyarı"));
        assert!(text.contains("Ayşe"));
    }

    #[actix_web::test]
    async fn rejects_wrong_type_and_forged_content() {
        let ctx = TestContext::new().await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/analyzer/extract", &student)
                .insert_header(content_type())
                .set_payload(multipart_body("notlar.txt", b"merhaba"))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 7001);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/analyzer/extract", &student)
                .insert_header(content_type())
                .set_payload(multipart_body("sahte.pdf", b"PK\x03\x04 not a pdf"))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 7001);
    }

    #[actix_web::test]
    async fn process_requires_consent_and_builds_prompt() {
        let scripted = ScriptedGenerator::new().reply("Puan: 78/100").reply("").fail("down");
        let ctx = TestContext::with_generator(scripted).await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/analyzer/process", &student)
                .set_json(json!({ "mode": "analyze", "text": "Proje metni", "consent": false }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 5002);

        let payload = json!({ "mode": "analyze", "text": "Proje metni", "consent": true });
        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/analyzer/process", &student).set_json(&payload)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["result"], "Puan: 78/100");
        assert_eq!(body["data"]["mode"], "analyze");

        let (_, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/analyzer/process", &student).set_json(&payload)
        );
        assert_eq!(body["data"]["result"], ANALYSIS_EMPTY_REPLY);

        let (_, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/analyzer/process", &student).set_json(&payload)
        );
        assert_eq!(body["data"]["result"], CONNECTION_ERROR_REPLY);

        let recorded = ctx.scripted.recorded();
        assert_eq!(recorded.len(), 3);
        assert_eq!(recorded[0].tier, ModelTier::Report);
        assert!(recorded[0].contents[0].text.ends_with(&format!("{PROJECT_TEXT_MARKER}Proje metni")));
    }
}
