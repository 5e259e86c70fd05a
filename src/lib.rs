//! Rize Teknofest 项目写作助手后端服务
//!
//! 基于 Actix Web 构建：学生借助 AI 撰写项目报告，指导教师审阅并反馈，
//! 管理员维护账号。
//!
//! # 架构
//! - `ai`: 生成式文本服务（Gemini）与提示词
//! - `cache`: 进程内缓存（Moka）
//! - `catalog`: 向导问题集、比赛信息等静态内容
//! - `config`: 配置管理
//! - `documents`: Word / PDF 生成与文本提取
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod ai;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod documents;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
