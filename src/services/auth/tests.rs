use actix_web::http::{Method, StatusCode};
use serde_json::json;

use crate::models::users::UserRole;
use crate::services::test_support::{TestContext, call_json, init_app};

#[actix_web::test]
async fn login_rejects_wrong_password_and_unknown_user() {
    let ctx = TestContext::new().await;
    ctx.seed_user("ayse", "1234", UserRole::Student, None).await;
    let app = init_app!(ctx);

    let req = ctx
        .request(Method::POST, "/api/v1/auth/login")
        .set_json(json!({"username": "ayse", "password": "yanlis"}));
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Kullanıcı adı veya şifre yanlış!");

    let req = ctx
        .request(Method::POST, "/api/v1/auth/login")
        .set_json(json!({"username": "kimse", "password": "1234"}));
    let (status, _) = call_json!(app, req);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_returns_token_and_refresh_cookie() {
    let ctx = TestContext::new().await;
    ctx.seed_user("hoca", "sifre", UserRole::Teacher, None).await;
    let app = init_app!(ctx);

    let req = ctx
        .request(Method::POST, "/api/v1/auth/login")
        .set_json(json!({"username": "hoca", "password": "sifre"}));
    let resp = actix_web::test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.response()
            .cookies()
            .any(|c| c.name() == "refresh_token" && !c.value().is_empty())
    );

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["user"]["role"], "TEACHER");
    assert!(body["data"]["user"].get("password_hash").is_none());
    assert!(body["data"]["access_token"].as_str().unwrap().len() > 20);
}

#[actix_web::test]
async fn register_rejects_duplicates_and_admin_role() {
    let ctx = TestContext::new().await;
    ctx.seed_user("mevcut", "1234", UserRole::Student, None).await;
    let app = init_app!(ctx);

    let req = ctx
        .request(Method::POST, "/api/v1/auth/register")
        .set_json(json!({"username": "mevcut", "password": "1234", "role": "STUDENT"}));
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Bu kullanıcı adı alınmış.");

    let req = ctx
        .request(Method::POST, "/api/v1/auth/register")
        .set_json(json!({"username": "patron", "password": "1234", "role": "ADMIN"}));
    let (status, _) = call_json!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn register_keeps_advisor_only_for_students() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = ctx.request(Method::POST, "/api/v1/auth/register").set_json(
        json!({"username": "ogrenci", "password": "1234", "role": "STUDENT", "advisor_username": " hoca "}),
    );
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["advisor_username"], "hoca");

    let req = ctx.request(Method::POST, "/api/v1/auth/register").set_json(
        json!({"username": "ogretmen", "password": "1234", "role": "teacher", "advisor_username": "biri"}),
    );
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["user"]["advisor_username"].is_null());
}

#[actix_web::test]
async fn register_accepts_turkish_usernames() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = ctx
        .request(Method::POST, "/api/v1/auth/register")
        .set_json(json!({"username": "gülşen", "password": "1234", "role": "STUDENT"}));
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["username"], "gülşen");

    let req = ctx
        .request(Method::POST, "/api/v1/auth/login")
        .set_json(json!({"username": "gülşen", "password": "1234"}));
    let (status, _) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn profile_update_keeps_password_when_blank() {
    let ctx = TestContext::new().await;
    let student = ctx.seed_user("ali", "eski1", UserRole::Student, Some("x")).await;
    let app = init_app!(ctx);

    let req = ctx
        .as_user(Method::PUT, "/api/v1/auth/profile", &student)
        .set_json(json!({"new_password": "", "advisor_username": "yeni_hoca"}));
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["advisor_username"], "yeni_hoca");

    // 旧密码仍然有效
    let req = ctx
        .request(Method::POST, "/api/v1/auth/login")
        .set_json(json!({"username": "ali", "password": "eski1"}));
    let (status, _) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);

    let req = ctx
        .as_user(Method::PUT, "/api/v1/auth/profile", &student)
        .set_json(json!({"new_password": "yeni1"}));
    let (status, _) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);

    let req = ctx
        .request(Method::POST, "/api/v1/auth/login")
        .set_json(json!({"username": "ali", "password": "yeni1"}));
    let (status, _) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn me_requires_token() {
    let ctx = TestContext::new().await;
    let user = ctx.seed_user("zeynep", "1234", UserRole::Student, None).await;
    let app = init_app!(ctx);

    let (status, _) = call_json!(app, ctx.request(Method::GET, "/api/v1/auth/me"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = call_json!(app, ctx.as_user(Method::GET, "/api/v1/auth/me", &user));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["username"], "zeynep");
}
