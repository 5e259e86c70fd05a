use crate::ai::{TextGenerator, create_generator};
use crate::cache::{ObjectCache, create_cache};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub generator: Arc<dyn TextGenerator>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 没有任何管理员时创建内置管理员账号
pub async fn seed_admin(storage: &Arc<dyn Storage>) -> Result<()> {
    let admins = storage.count_users_by_role(UserRole::Admin).await?;
    if admins > 0 {
        debug!("Found {} admin account(s), skipping admin seed", admins);
        return Ok(());
    }

    let username = AppConfig::get().admin.username.clone();
    info!("No admin account found, creating '{}'", username);

    // 优先使用环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| {
            let pwd = generate_random_password(16);
            warn!("==========================================================");
            warn!("  ADMIN_PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Admin username: {}", username);
            warn!("  Generated admin password: {}", pwd);
            warn!("==========================================================");
            pwd
        });

    let user = storage
        .create_user(CreateUserRequest {
            username,
            password_hash: hash_password(&password)?,
            role: UserRole::Admin,
            advisor_username: None,
        })
        .await?;

    info!(
        "Admin account created (ID: {}, username: {})",
        user.id, user.username
    );
    Ok(())
}

/// 准备服务器启动的上下文：存储、缓存和文本生成器
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await?;

    let cache = create_cache();
    warn!("Cache backend initialized");

    let generator = create_generator()?;

    Ok(StartupContext {
        storage,
        cache,
        generator,
    })
}
