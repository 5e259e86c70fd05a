//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod chat_history;
mod messages;
mod projects;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TeknofestError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config.database.pool_size, config.database.timeout)
                .await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Self::migrate(&db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存 SQLite（单连接，连接关闭即丢失数据）
    pub async fn new_in_memory() -> Result<Self> {
        let db = Self::connect_sqlite("sqlite::memory:", 1, 5).await?;
        Self::migrate(&db).await?;
        Ok(Self { db })
    }

    async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .map_err(|e| TeknofestError::database_operation(format!("数据库迁移失败: {e}")))
    }

    /// SQLite 专用连接（文件库启用 WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");
        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TeknofestError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("wal_autocheckpoint", "1000");
        }

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { pool_size })
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(timeout));
        if in_memory {
            // 内存库随连接销毁，连接必须常驻
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        } else {
            pool_options = pool_options
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300));
        }

        let pool = pool_options
            .connect_with(opt)
            .await
            .map_err(|e| TeknofestError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt).await.map_err(|e| {
            TeknofestError::database_connection(format!("无法连接到数据库: {e}"))
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TeknofestError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    chat::{ChatMessage, requests::CreateChatMessageRequest},
    messages::{Message, requests::CreateMessageRequest},
    projects::{
        Project,
        requests::{CreateProjectRequest, UpdateProjectRequest},
    },
    users::{
        User, UserRole,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn list_students_by_advisor(&self, advisor_username: &str) -> Result<Vec<User>> {
        self.list_students_by_advisor_impl(advisor_username).await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, username: &str) -> Result<bool> {
        self.delete_user_impl(username).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 项目模块
    async fn create_project(&self, project: CreateProjectRequest) -> Result<Project> {
        self.create_project_impl(project).await
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>> {
        self.get_project_by_id_impl(id).await
    }

    async fn update_project(
        &self,
        id: i64,
        update: UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        self.update_project_impl(id, update).await
    }

    async fn delete_project(&self, id: i64) -> Result<bool> {
        self.delete_project_impl(id).await
    }

    async fn list_projects_by_student(&self, student_username: &str) -> Result<Vec<Project>> {
        self.list_projects_by_student_impl(student_username).await
    }

    async fn list_submitted_projects(&self, student_usernames: &[String]) -> Result<Vec<Project>> {
        self.list_submitted_projects_impl(student_usernames).await
    }

    // 对话记录模块
    async fn append_chat_message(
        &self,
        message: CreateChatMessageRequest,
    ) -> Result<ChatMessage> {
        self.append_chat_message_impl(message).await
    }

    async fn list_chat_history(&self, username: &str) -> Result<Vec<ChatMessage>> {
        self.list_chat_history_impl(username).await
    }

    async fn clear_chat_history(&self, username: &str) -> Result<u64> {
        self.clear_chat_history_impl(username).await
    }

    // 留言模块
    async fn create_message(&self, message: CreateMessageRequest) -> Result<Message> {
        self.create_message_impl(message).await
    }

    async fn list_messages_to(&self, to_username: &str) -> Result<Vec<Message>> {
        self.list_messages_to_impl(to_username).await
    }
}
