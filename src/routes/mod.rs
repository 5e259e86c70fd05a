pub mod analyzer;

pub mod auth;

pub mod chat;

pub mod exports;

pub mod frontend;

pub mod info;

pub mod messages;

pub mod projects;

pub mod system;

pub mod teacher;

pub mod users;

pub mod wizard;

pub use analyzer::configure_analyzer_routes;
pub use auth::configure_auth_routes;
pub use chat::configure_chat_routes;
pub use exports::configure_export_routes;
pub use frontend::configure_frontend_routes;
pub use info::configure_info_routes;
pub use messages::configure_message_routes;
pub use projects::configure_project_routes;
pub use system::configure_system_routes;
pub use teacher::configure_teacher_routes;
pub use users::configure_user_routes;
pub use wizard::configure_wizard_routes;

use actix_web::web;

/// 注册全部 `/api/v1` 路由（前端兜底路由需最后单独注册）
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_project_routes)
        .configure(configure_teacher_routes)
        .configure(configure_message_routes)
        .configure(configure_chat_routes)
        .configure(configure_wizard_routes)
        .configure(configure_analyzer_routes)
        .configure(configure_export_routes)
        .configure(configure_info_routes)
        .configure(configure_system_routes);
}
