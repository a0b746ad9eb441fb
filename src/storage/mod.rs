//! 数据存储层
//!
//! `Storage` 定义门户需要的全部持久化操作，`SeaOrmStorage` 是唯一实现。
//! 按 ID 查询统一返回 `Fetched`，由调用方决定如何处理缺失或重复。

use std::fmt::Display;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::DatabaseConfig;
use crate::errors::{PortalError, Result};
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

pub mod sea_orm_storage;

/// 唯一记录查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    Found(T),
    NotFound,
    Ambiguous,
}

impl<T> Fetched<T> {
    /// 由最多两行的查询结果构造
    pub fn from_rows(mut rows: Vec<T>) -> Self {
        match rows.len() {
            0 => Fetched::NotFound,
            1 => Fetched::Found(rows.remove(0)),
            _ => Fetched::Ambiguous,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Found(value) => Fetched::Found(f(value)),
            Fetched::NotFound => Fetched::NotFound,
            Fetched::Ambiguous => Fetched::Ambiguous,
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Fetched::Found(value) => Some(value),
            _ => None,
        }
    }

    /// 缺失或重复转换为对应的错误
    pub fn into_result(self, what: impl Display) -> Result<T> {
        match self {
            Fetched::Found(value) => Ok(value),
            Fetched::NotFound => Err(PortalError::not_found(format!("{what} does not exist"))),
            Fetched::Ambiguous => Err(PortalError::ambiguous(format!(
                "{what} matched more than one row"
            ))),
        }
    }
}

/// 登录身份查询，会话认证只依赖这一项能力
#[async_trait::async_trait]
pub trait TutorDirectory: Send + Sync {
    async fn find_tutor_by_email(&self, email: &str) -> Result<Fetched<Tutor>>;
}

#[async_trait::async_trait]
pub trait Storage: TutorDirectory {
    /// 运行时配置
    // 按名称读取配置
    async fn get_config(&self, name: &str) -> Result<Fetched<ConfigEntry>>;
    // 写入新配置
    async fn create_config(&self, name: &str, value: &str) -> Result<ConfigEntry>;

    /// 学期管理
    async fn list_semesters(&self) -> Result<Vec<Semester>>;
    async fn get_semester(&self, id: i64) -> Result<Fetched<Semester>>;
    // id 为空时新建，否则只更新有变化的字段
    async fn edit_semester(&self, form: SemesterForm, id: Option<i64>) -> Result<Semester>;
    async fn delete_semester(&self, id: i64) -> Result<bool>;

    /// 教授管理
    async fn list_professors(&self) -> Result<Vec<Professor>>;
    async fn get_professor(&self, id: i64) -> Result<Fetched<Professor>>;
    async fn edit_professor(&self, form: ProfessorForm, id: Option<i64>) -> Result<Professor>;
    async fn delete_professor(&self, id: i64) -> Result<bool>;

    /// 课程管理
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn get_course(&self, id: i64) -> Result<Fetched<Course>>;
    async fn edit_course(&self, form: CourseForm, id: Option<i64>) -> Result<Course>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 课程班级管理
    async fn list_sections(&self) -> Result<Vec<Section>>;
    async fn get_section(&self, id: i64) -> Result<Fetched<Section>>;
    async fn edit_section(&self, form: SectionForm, id: Option<i64>) -> Result<Section>;
    async fn delete_section(&self, id: i64) -> Result<bool>;

    /// 辅导员管理
    async fn list_tutors(&self) -> Result<Vec<Tutor>>;
    async fn get_tutor(&self, id: i64) -> Result<Fetched<Tutor>>;
    // 同一事务内更新辅导员及其可辅导课程
    async fn edit_tutor(&self, form: TutorForm, id: Option<i64>) -> Result<Tutor>;
    async fn delete_tutor(&self, id: i64) -> Result<bool>;
    // 辅导员可辅导的课程 ID
    async fn list_tutor_courses(&self, tutor_id: i64) -> Result<Vec<i64>>;

    /// 问题类型管理
    async fn list_problem_types(&self) -> Result<Vec<ProblemType>>;
    async fn get_problem_type(&self, id: i64) -> Result<Fetched<ProblemType>>;
    async fn edit_problem_type(
        &self,
        form: ProblemTypeForm,
        id: Option<i64>,
    ) -> Result<ProblemType>;
    async fn delete_problem_type(&self, id: i64) -> Result<bool>;

    /// 报表
    // 状态为空或 open 的工单
    async fn list_open_tickets(&self) -> Result<Vec<Ticket>>;
    // 指定日期所在学期内各展示课程的工单数与辅导员数
    async fn course_availability(&self, today: NaiveDate) -> Result<Vec<CourseAvailability>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_from_rows() {
        assert_eq!(Fetched::<i32>::from_rows(vec![]), Fetched::NotFound);
        assert_eq!(Fetched::from_rows(vec![7]), Fetched::Found(7));
        assert_eq!(Fetched::from_rows(vec![7, 8]), Fetched::Ambiguous);
    }

    #[test]
    fn test_fetched_into_result() {
        assert_eq!(Fetched::Found(1).into_result("semester 1").unwrap(), 1);
        assert_eq!(
            Fetched::<i32>::NotFound
                .into_result("semester 1")
                .unwrap_err()
                .code(),
            "E004"
        );
        assert_eq!(
            Fetched::<i32>::Ambiguous
                .into_result("semester 1")
                .unwrap_err()
                .code(),
            "E005"
        );
    }

    #[test]
    fn test_fetched_map() {
        assert_eq!(Fetched::Found(2).map(|v| v * 10), Fetched::Found(20));
        assert_eq!(Fetched::<i32>::NotFound.map(|v| v * 10), Fetched::NotFound);
        assert_eq!(Fetched::Found("a").found(), Some("a"));
        assert_eq!(Fetched::<&str>::Ambiguous.found(), None);
    }
}
