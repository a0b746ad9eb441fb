use config::{Config, ConfigError, Environment, File};

use super::{AppConfig, Cli};

/// 未指定端口时的默认端口（仅监听本机）
pub const DEFAULT_PORT: u16 = 80;
const PRIVATE_HOST: &str = "127.0.0.1";
const PUBLIC_HOST: &str = "0.0.0.0";

impl AppConfig {
    /// 加载配置
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "CSLC Tutoring Portal")?
            .set_default("app.environment", environment.clone())?
            .set_default("app.log_level", "info")?
            .set_default("app.debug", false)?
            .set_default("app.reload", false)?
            .set_default("server.host", PRIVATE_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 1_048_576)?
            .set_default("database.engine", "sqlite")?
            .set_default("database.path", ":memory:")?
            .set_default("database.pool_size", 8)?
            .set_default("database.timeout", 10)?
            .set_default(
                "auth.sso_url",
                "https://auth.unomaha.edu/idp/Authn/UserPassword",
            )?
            .set_default("auth.debug_email", "test@unomaha.edu")?
            .set_default("auth.cookie_name", "portal_session")?
            .set_default("auth.cookie_secure", false)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("cors.max_age", 3600)?
            // 默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(File::with_name(&format!("config.{environment}")).required(false))
            // 环境变量覆盖，例如 PORTAL_DATABASE__PATH
            .add_source(
                Environment::with_prefix("PORTAL")
                    .separator("__")
                    .try_parsing(true),
            );

        // 常用环境变量
        builder = builder
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.engine", std::env::var("DATABASE_TYPE").ok())?
            .set_override_option("database.path", std::env::var("DATABASE_PATH").ok())?;

        // 命令行参数优先级最高
        builder = Self::apply_cli(builder, cli)?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 应用命令行参数
    ///
    /// 显式指定端口时监听所有网卡，否则只监听本机；`--reload` 隐含 `--debug`。
    fn apply_cli<St: config::builder::BuilderState>(
        builder: config::builder::ConfigBuilder<St>,
        cli: &Cli,
    ) -> Result<config::builder::ConfigBuilder<St>, ConfigError> {
        let debug = cli.debug || cli.reload;
        builder
            .set_override_option("server.port", cli.port.map(i64::from))?
            .set_override_option("server.host", cli.port.map(|_| PUBLIC_HOST))?
            .set_override_option("database.path", cli.database.clone())?
            .set_override_option("database.engine", cli.engine.clone())?
            .set_override_option("app.debug", debug.then_some(true))?
            .set_override_option("app.reload", cli.reload.then_some(true))
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development" || self.app.debug
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
