//! Tutoring Portal - 校园辅导中心门户
//!
//! 基于 Actix Web 构建的辅导中心管理系统：公开的辅导状态页、
//! 辅导员登录以及课程、学期、辅导员等数据的后台管理。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 会话身份与访问控制中间件
//! - `models`: 数据模型定义
//! - `render`: HTML 模板渲染
//! - `routes`: 路由层
//! - `runtime`: 应用上下文与生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod render;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
