use serde::{Deserialize, Serialize};

/// 启动时保证存在的配置项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownConfigKey {
    /// 会话 Cookie 签名密钥
    SecretKey,
    /// 会话有效期（分钟）
    SessionLifetime,
}

impl KnownConfigKey {
    pub fn name(self) -> &'static str {
        match self {
            KnownConfigKey::SecretKey => "SECRET_KEY",
            KnownConfigKey::SessionLifetime => "PERMANENT_SESSION_LIFETIME",
        }
    }

    /// 缺失时写入的默认值，密钥为 None 表示需要随机生成
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            KnownConfigKey::SecretKey => None,
            KnownConfigKey::SessionLifetime => Some("30"),
        }
    }
}

impl std::fmt::Display for KnownConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// 配置表中的一条记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigEntry {
    pub name: String,
    pub value: String,
}
