pub mod generate;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::catalog::wizard::questions_response;
use crate::models::ApiResponse;
use crate::models::wizard::requests::{GenerateReportRequest, SubmitReportRequest};

pub struct WizardService;

impl WizardService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 问题集、评分标准与写作建议
    pub async fn questions(&self) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::Ok().json(ApiResponse::success(questions_response(), "Sorular alındı.")))
    }

    pub async fn generate(
        &self,
        body: GenerateReportRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        generate::generate_report(self, body, request).await
    }

    pub async fn submit(&self, body: SubmitReportRequest, request: &HttpRequest) -> ActixResult<HttpResponse> {
        submit::submit_report(self, body, request).await
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};
    use serde_json::json;

    use crate::ai::ModelTier;
    use crate::ai::prompts::{REPORT_EMPTY_REPLY, TEKNOFEST_EXPERT_PROMPT};
    use crate::ai::testing::ScriptedGenerator;
    use crate::models::users::UserRole;
    use crate::services::test_support::{TestContext, call_json, init_app};

    #[actix_web::test]
    async fn questions_are_grouped_into_steps() {
        let ctx = TestContext::new().await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let (status, body) =
            call_json!(app, ctx.as_user(Method::GET, "/api/v1/wizard/questions", &student));
        assert_eq!(status, StatusCode::OK);
        let steps = body["data"]["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2]["title"], "Uygulanabilirlik & Maliyet");
    }

    #[actix_web::test]
    async fn generate_sanitizes_model_output() {
        let scripted = ScriptedGenerator::new()
            .reply("## Proje Özeti\n* **Sel** riski 🌊 azaltılır\n> `not`")
            .reply("   ")
            .fail("quota");
        let ctx = TestContext::with_generator(scripted).await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);
        let payload = json!({ "answers": { "q1": "Dere taşkınları" } });

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/wizard/generate", &student).set_json(&payload)
        );
        assert_eq!(status, StatusCode::OK);
        let report = body["data"]["report"].as_str().unwrap();
        assert!(report.starts_with("Proje Özeti"));
        assert!(!report.contains('*'));
        assert!(!report.contains('#'));
        assert!(!report.contains('🌊'));

        let (_, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/wizard/generate", &student).set_json(&payload)
        );
        assert_eq!(body["data"]["report"], REPORT_EMPTY_REPLY);

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/wizard/generate", &student).set_json(&payload)
        );
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], 5001);

        let recorded = ctx.scripted.recorded();
        assert_eq!(recorded[0].tier, ModelTier::Report);
        assert!(recorded[0].system_instruction.is_none());
        let prompt = &recorded[0].contents[0].text;
        assert!(prompt.starts_with(TEKNOFEST_EXPERT_PROMPT));
        assert!(prompt.contains("Hangi problemi çözüyorum?: Dere taşkınları"));
    }

    #[actix_web::test]
    async fn submit_creates_submitted_project() {
        let ctx = TestContext::new().await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, Some("hoca")).await;
        let app = init_app!(ctx);
        let long_problem = "Karadeniz bölgesinde yoğun yağışlar sonrası oluşan heyelanların önceden tespiti";

        let (status, body) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/wizard/submit", &student).set_json(json!({
                "answers": { "q1": long_problem },
                "report": "Rapor metni"
            }))
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body["message"],
            "Raporunuz başarıyla danışman öğretmeninize jüri yorumları ile birlikte gönderildi!"
        );
        assert_eq!(body["data"]["status"], "submitted");
        let expected: String = long_problem.chars().take(50).collect::<String>() + "...";
        assert_eq!(body["data"]["title"], expected.as_str());

        let (status, _) = call_json!(
            app,
            ctx.as_user(Method::POST, "/api/v1/wizard/submit", &student)
                .set_json(json!({ "answers": {}, "report": " " }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
