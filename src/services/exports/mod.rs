use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::documents;
use crate::models::ErrorCode;
use crate::models::exports::TeamFileRequest;
use crate::services::{download, internal_error};

pub struct ExportService;

impl ExportService {
    pub fn new_lazy() -> Self {
        Self
    }

    /// 生成团队介绍文件（DOCX / PDF）
    pub async fn team_file(&self, body: TeamFileRequest) -> ActixResult<HttpResponse> {
        let format = body.format;
        match web::block(move || documents::team_file(&body)).await {
            Ok(Ok(file)) => {
                tracing::info!("Generated team file {} ({} bytes)", file.file_name, file.bytes.len());
                Ok(download(file))
            }
            Ok(Err(e)) => Ok(internal_error(
                ErrorCode::ExportFailed,
                &format!("Team file export ({}) failed", format.extension()),
                e,
            )),
            Err(e) => Ok(internal_error(ErrorCode::ExportFailed, "Export worker failed", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode, header};
    use actix_web::test::{call_service, read_body};
    use serde_json::json;

    use crate::models::users::UserRole;
    use crate::services::test_support::{TestContext, init_app};

    #[actix_web::test]
    async fn team_file_downloads_docx_and_pdf() {
        let ctx = TestContext::new().await;
        let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
        let app = init_app!(ctx);

        let payload = json!({
            "team_name": "Kaçkar",
            "team_description": "Yaylalarda enerji izleme",
            "members": [{ "name": "Ayşe", "role": "Yazılım", "class": "11-B" }]
        });
        let resp = call_service(
            &app,
            ctx.as_user(Method::POST, "/api/v1/exports/team-file", &student)
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        assert!(disposition.to_str().unwrap().contains("Ka%C3%A7kar_dosyasi.docx"));
        assert!(read_body(resp).await.starts_with(b"PK"));

        let resp = call_service(
            &app,
            ctx.as_user(Method::POST, "/api/v1/exports/team-file", &student)
                .set_json(json!({ "format": "pdf", "members": [] }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        assert!(disposition.to_str().unwrap().contains("takim_dosyasi.pdf"));
        assert!(read_body(resp).await.starts_with(b"%PDF"));
    }
}
