//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod editor;
mod problem_types;
mod professors;
mod reports;
mod sections;
mod semesters;
mod system_config;
mod tutors;

use std::time::Duration;

use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, QuerySelect,
    Select,
};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{PortalError, Result};
use crate::storage::Fetched;

/// SQLite 内存数据库标记
const SQLITE_MEMORY: &str = ":memory:";

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 连接数据库并执行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.engine, &config.path)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存数据库，供测试使用
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig {
            engine: "sqlite".into(),
            path: SQLITE_MEMORY.into(),
            pool_size: 1,
            timeout: 5,
        })
        .await
    }

    /// SQLite 专用连接（文件库启用 WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(SQLITE_MEMORY);

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));
        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory");
        }

        // 内存库的数据随连接消失，只能保持唯一且常驻的连接
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size.max(1))
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size.max(1))
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 由数据库类型和路径构建连接 URL
    fn build_database_url(engine: &str, path: &str) -> Result<String> {
        if path.contains("://") {
            return Ok(path.to_string());
        }

        match engine {
            "sqlite" if path == SQLITE_MEMORY => Ok("sqlite::memory:".to_string()),
            "sqlite" => Ok(format!("sqlite://{path}?mode=rwc")),
            "postgres" | "postgresql" | "mysql" | "mariadb" => Ok(format!("{engine}://{path}")),
            _ => Err(PortalError::database_config(format!(
                "不支持的数据库类型: {engine}. 支持: sqlite, postgres, mysql, mariadb"
            ))),
        }
    }
}

/// 查询唯一记录，最多取两行以区分缺失与重复
pub(crate) async fn fetch_one<E, C>(select: Select<E>, db: &C) -> Result<Fetched<E::Model>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let rows = select
        .limit(2)
        .all(db)
        .await
        .map_err(|e| PortalError::database_operation(format!("查询记录失败: {e}")))?;

    Ok(Fetched::from_rows(rows))
}

// Storage trait 实现
use crate::models::{
    courses::{entities::Course, requests::CourseForm},
    problem_types::{entities::ProblemType, requests::ProblemTypeForm},
    professors::{entities::Professor, requests::ProfessorForm},
    reports::responses::CourseAvailability,
    sections::{entities::Section, requests::SectionForm},
    semesters::{entities::Semester, requests::SemesterForm},
    system::entities::ConfigEntry,
    tickets::entities::Ticket,
    tutors::{entities::Tutor, requests::TutorForm},
};
use crate::storage::{Storage, TutorDirectory};
use async_trait::async_trait;

#[async_trait]
impl TutorDirectory for SeaOrmStorage {
    async fn find_tutor_by_email(&self, email: &str) -> Result<Fetched<Tutor>> {
        self.find_tutor_by_email_impl(email).await
    }
}

#[async_trait]
impl Storage for SeaOrmStorage {
    // 配置模块
    async fn get_config(&self, name: &str) -> Result<Fetched<ConfigEntry>> {
        self.get_config_impl(name).await
    }

    async fn create_config(&self, name: &str, value: &str) -> Result<ConfigEntry> {
        self.create_config_impl(name, value).await
    }

    // 学期模块
    async fn list_semesters(&self) -> Result<Vec<Semester>> {
        self.list_semesters_impl().await
    }

    async fn get_semester(&self, id: i64) -> Result<Fetched<Semester>> {
        self.get_semester_impl(id).await
    }

    async fn edit_semester(&self, form: SemesterForm, id: Option<i64>) -> Result<Semester> {
        self.edit_semester_impl(form, id).await
    }

    async fn delete_semester(&self, id: i64) -> Result<bool> {
        self.delete_semester_impl(id).await
    }

    // 教授模块
    async fn list_professors(&self) -> Result<Vec<Professor>> {
        self.list_professors_impl().await
    }

    async fn get_professor(&self, id: i64) -> Result<Fetched<Professor>> {
        self.get_professor_impl(id).await
    }

    async fn edit_professor(&self, form: ProfessorForm, id: Option<i64>) -> Result<Professor> {
        self.edit_professor_impl(form, id).await
    }

    async fn delete_professor(&self, id: i64) -> Result<bool> {
        self.delete_professor_impl(id).await
    }

    // 课程模块
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn get_course(&self, id: i64) -> Result<Fetched<Course>> {
        self.get_course_impl(id).await
    }

    async fn edit_course(&self, form: CourseForm, id: Option<i64>) -> Result<Course> {
        self.edit_course_impl(form, id).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 课程班级模块
    async fn list_sections(&self) -> Result<Vec<Section>> {
        self.list_sections_impl().await
    }

    async fn get_section(&self, id: i64) -> Result<Fetched<Section>> {
        self.get_section_impl(id).await
    }

    async fn edit_section(&self, form: SectionForm, id: Option<i64>) -> Result<Section> {
        self.edit_section_impl(form, id).await
    }

    async fn delete_section(&self, id: i64) -> Result<bool> {
        self.delete_section_impl(id).await
    }

    // 辅导员模块
    async fn list_tutors(&self) -> Result<Vec<Tutor>> {
        self.list_tutors_impl().await
    }

    async fn get_tutor(&self, id: i64) -> Result<Fetched<Tutor>> {
        self.get_tutor_impl(id).await
    }

    async fn edit_tutor(&self, form: TutorForm, id: Option<i64>) -> Result<Tutor> {
        self.edit_tutor_impl(form, id).await
    }

    async fn delete_tutor(&self, id: i64) -> Result<bool> {
        self.delete_tutor_impl(id).await
    }

    async fn list_tutor_courses(&self, tutor_id: i64) -> Result<Vec<i64>> {
        self.list_tutor_courses_impl(tutor_id).await
    }

    // 问题类型模块
    async fn list_problem_types(&self) -> Result<Vec<ProblemType>> {
        self.list_problem_types_impl().await
    }

    async fn get_problem_type(&self, id: i64) -> Result<Fetched<ProblemType>> {
        self.get_problem_type_impl(id).await
    }

    async fn edit_problem_type(
        &self,
        form: ProblemTypeForm,
        id: Option<i64>,
    ) -> Result<ProblemType> {
        self.edit_problem_type_impl(form, id).await
    }

    async fn delete_problem_type(&self, id: i64) -> Result<bool> {
        self.delete_problem_type_impl(id).await
    }

    // 报表模块
    async fn list_open_tickets(&self) -> Result<Vec<Ticket>> {
        self.list_open_tickets_impl().await
    }

    async fn course_availability(&self, today: NaiveDate) -> Result<Vec<CourseAvailability>> {
        self.course_availability_impl(today).await
    }
}
