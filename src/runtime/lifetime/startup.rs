use std::sync::Arc;

use actix_web::cookie::Key;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use crate::models::system::entities::KnownConfigKey;
use crate::storage::{Fetched, Storage};
use crate::utils::generate_secret;

/// 新生成密钥的长度，签名 Cookie 至少需要 64 字节
const SECRET_KEY_LENGTH: usize = 88;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub settings: RuntimeSettings,
}

/// 从数据库配置表加载的运行时设置
pub struct RuntimeSettings {
    pub secret_key: Key,
    pub session_lifetime_minutes: i64,
}

/// 读取配置项，不存在时写入默认值
async fn ensure_config(storage: &dyn Storage, key: KnownConfigKey) -> Result<String> {
    match storage.get_config(key.name()).await? {
        Fetched::NotFound => {
            let value = key
                .default_value()
                .map(str::to_string)
                .unwrap_or_else(|| generate_secret(SECRET_KEY_LENGTH));
            storage.create_config(key.name(), &value).await?;
            info!("Config {} not found, default value stored", key);
            Ok(value)
        }
        fetched => fetched.map(|entry| entry.value).into_result(key),
    }
}

/// 会话有效期（分钟），必须为正整数
fn parse_session_lifetime(value: &str) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(PortalError::validation(format!(
            "{} must be a positive number of minutes, got '{value}'",
            KnownConfigKey::SessionLifetime
        ))),
    }
}

/// 确保配置行存在并转换为运行时设置
pub async fn bootstrap_settings(storage: &dyn Storage) -> Result<RuntimeSettings> {
    let secret = ensure_config(storage, KnownConfigKey::SecretKey).await?;
    let lifetime = ensure_config(storage, KnownConfigKey::SessionLifetime).await?;

    let secret_key = Key::try_from(secret.as_bytes()).map_err(|e| {
        PortalError::validation(format!("{} is too short: {e}", KnownConfigKey::SecretKey))
    })?;

    Ok(RuntimeSettings {
        secret_key,
        session_lifetime_minutes: parse_session_lifetime(&lifetime)?,
    })
}

/// 准备服务器启动的上下文
/// 包括存储连接、数据库迁移和运行时配置
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    let settings = bootstrap_settings(storage.as_ref()).await?;
    info!(
        "Runtime settings loaded, session lifetime {} minutes",
        settings.session_lifetime_minutes
    );

    Ok(StartupContext { storage, settings })
}
