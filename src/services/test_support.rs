//! actix 服务测试的公共环境：内存 SQLite、独立缓存和脚本化文本生成器

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use actix_web::http::{Method, header};
use actix_web::test::TestRequest;

use crate::ai::TextGenerator;
use crate::ai::testing::ScriptedGenerator;
use crate::cache::{MokaCacheWrapper, ObjectCache};
use crate::models::users::{User, UserRole, requests::CreateUserRequest};
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::hash_password_with;

static NEXT_CLIENT: AtomicU32 = AtomicU32::new(1);

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub scripted: Arc<ScriptedGenerator>,
    pub generator: Arc<dyn TextGenerator>,
    client_ip: String,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_generator(ScriptedGenerator::new()).await
    }

    pub async fn with_generator(scripted: ScriptedGenerator) -> Self {
        let storage: Arc<dyn Storage> =
            Arc::new(SeaOrmStorage::new_in_memory().await.expect("in-memory storage"));
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(1000, 60));
        let scripted = Arc::new(scripted);
        let generator: Arc<dyn TextGenerator> = scripted.clone();

        // 每个测试使用不同的客户端 IP，避免共享的限流计数互相影响
        let n = NEXT_CLIENT.fetch_add(1, Ordering::Relaxed);
        let client_ip = format!("10.{}.{}.{}", (n >> 16) & 0xff, (n >> 8) & 0xff, n & 0xff);

        Self {
            storage,
            cache,
            scripted,
            generator,
            client_ip,
        }
    }

    pub async fn seed_user(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
        advisor: Option<&str>,
    ) -> User {
        self.storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                password_hash: hash_password_with(password, 1024, 1, 1).unwrap(),
                role,
                advisor_username: advisor.map(str::to_string),
            })
            .await
            .unwrap()
    }

    pub fn request(&self, method: Method, uri: &str) -> TestRequest {
        TestRequest::default()
            .method(method)
            .uri(uri)
            .insert_header(("X-Forwarded-For", self.client_ip.as_str()))
    }

    pub fn as_user(&self, method: Method, uri: &str, user: &User) -> TestRequest {
        let token = JwtUtils::generate_access_token(user.id, user.role.as_str()).unwrap();
        self.request(method, uri)
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
    }
}

/// 以完整的 API 路由初始化测试服务
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.storage.clone()))
                .app_data(actix_web::web::Data::new($ctx.cache.clone()))
                .app_data(actix_web::web::Data::new($ctx.generator.clone()))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(crate::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(crate::utils::query_error_handler),
                )
                .configure(crate::routes::configure_api),
        )
        .await
    };
}

pub(crate) use init_app;

/// 发送请求并解析统一响应体
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

pub(crate) use call_json;
