use actix_web::http::{Method, StatusCode};
use serde_json::json;

use crate::models::users::UserRole;
use crate::services::test_support::{TestContext, call_json, init_app};

#[actix_web::test]
async fn draft_and_submit_set_status() {
    let ctx = TestContext::new().await;
    let student = ctx.seed_user("ali", "1234", UserRole::Student, Some("hoca")).await;
    let app = init_app!(ctx);

    let (status, body) = call_json!(
        app,
        ctx.as_user(Method::POST, "/api/v1/projects", &student).set_json(json!({
            "title": "Akıllı Sera",
            "description": "Çay bahçeleri için nem takibi",
            "status": "draft"
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Taslak kaydedildi.");
    assert_eq!(body["data"]["status"], "draft");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call_json!(
        app,
        ctx.as_user(Method::POST, "/api/v1/projects", &student).set_json(json!({
            "id": id,
            "title": "Akıllı Sera",
            "description": "Çay bahçeleri için nem ve sıcaklık takibi",
            "status": "submitted"
        }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Projeniz başarıyla öğretmene gönderildi!");
    assert_eq!(body["data"]["status"], "submitted");

    let (_, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/projects", &student));
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id);
}

#[actix_web::test]
async fn blank_fields_are_rejected() {
    let ctx = TestContext::new().await;
    let student = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
    let app = init_app!(ctx);

    let (status, body) = call_json!(
        app,
        ctx.as_user(Method::POST, "/api/v1/projects", &student).set_json(json!({
            "title": "   ",
            "description": "açıklama",
            "status": "draft"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Lütfen başlık ve açıklama giriniz.");
}

#[actix_web::test]
async fn only_owner_can_update_or_delete() {
    let ctx = TestContext::new().await;
    let owner = ctx.seed_user("ali", "1234", UserRole::Student, None).await;
    let other = ctx.seed_user("veli", "1234", UserRole::Student, None).await;
    let app = init_app!(ctx);

    let (_, body) = call_json!(
        app,
        ctx.as_user(Method::POST, "/api/v1/projects", &owner).set_json(json!({
            "title": "Drone",
            "description": "Orman yangını erken uyarı",
            "status": "draft"
        }))
    );
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = call_json!(
        app,
        ctx.as_user(Method::POST, "/api/v1/projects", &other).set_json(json!({
            "id": id,
            "title": "Başka",
            "description": "Başka",
            "status": "submitted"
        }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let uri = format!("/api/v1/projects/{id}");
    let (status, _) = call_json!(app, ctx.as_user(Method::DELETE, &uri, &other));
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call_json!(app, ctx.as_user(Method::DELETE, &uri, &owner));
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call_json!(app, ctx.as_user(Method::GET, &uri, &owner));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn advisor_can_view_and_export() {
    let ctx = TestContext::new().await;
    let advisor = ctx.seed_user("hoca", "1234", UserRole::Teacher, None).await;
    let stranger = ctx.seed_user("baska", "1234", UserRole::Teacher, None).await;
    let student = ctx.seed_user("ali", "1234", UserRole::Student, Some("hoca")).await;
    let app = init_app!(ctx);

    let (_, body) = call_json!(
        app,
        ctx.as_user(Method::POST, "/api/v1/projects", &student).set_json(json!({
            "title": "Heyelan Sensörü",
            "description": "Yamaç hareketlerini ölçen ağ",
            "status": "submitted"
        }))
    );
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/projects/{id}");

    let (status, body) = call_json!(app, ctx.as_user(Method::GET, &uri, &advisor));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Heyelan Sensörü");

    let (status, _) = call_json!(app, ctx.as_user(Method::GET, &uri, &stranger));
    assert_eq!(status, StatusCode::FORBIDDEN);

    let resp = actix_web::test::call_service(
        &app,
        ctx.as_user(Method::GET, &format!("{uri}/export?format=docx"), &advisor)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get(actix_web::http::header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains(&format!("proje_{id}.docx")));
    let bytes = actix_web::test::read_body(resp).await;
    assert!(bytes.starts_with(b"PK"));
}
