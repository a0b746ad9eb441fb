//! 请求处理共享的应用上下文
//!
//! 启动时构建一次，通过 `web::Data<AppContext>` 交给每个处理函数。

use std::sync::Arc;

use tracing::warn;

use crate::config::AppConfig;
use crate::render::Templates;
use crate::storage::Storage;

/// 登录相关设置
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// 会话中的身份直接视为管理员，不查询数据库（仅调试构建）
    pub debug_identity: bool,
    pub debug_email: String,
    pub sso_url: String,
}

impl AuthSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        let debug_identity = config.app.debug && cfg!(debug_assertions);
        if config.app.debug && !debug_identity {
            warn!("Debug mode requested, but the debug identity is unavailable in release builds");
        }

        Self {
            debug_identity,
            debug_email: config.auth.debug_email.clone(),
            sso_url: config.auth.sso_url.clone(),
        }
    }
}

pub struct AppContext {
    pub storage: Arc<dyn Storage>,
    pub templates: Templates,
    pub auth: AuthSettings,
}

impl AppContext {
    pub fn new(config: &AppConfig, storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            templates: Templates::new(config.app.system_name.clone(), config.app.reload),
            auth: AuthSettings::from_config(config),
        }
    }
}
