//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 所有错误最终通过共享的错误页模板渲染为 HTTP 响应。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::tutors::entities::Tutor;
use crate::render::Templates;
use crate::services::pages::error_page;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PortalError {
            $($variant(String),)*
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    NotFound("E004", "Resource Not Found"),
    Ambiguous("E005", "Ambiguous Result"),
    Validation("E006", "Validation Error"),
    DateParse("E007", "Date Parse Error"),
    Serialization("E008", "Serialization Error"),
    FileOperation("E009", "File Operation Error"),
    Template("E010", "Template Error"),
    Session("E011", "Session Error"),
    Forbidden("E012", "Authorization Error"),
}

pub const FORBIDDEN_MESSAGE: &str = "You don't have access to this page.";
pub const NOT_FOUND_PAGE_MESSAGE: &str = "We couldn't find the page you were looking for.";
const NO_RESULT_MESSAGE: &str = "Could not find the requested item in the database.";
const MULTIPLE_RESULTS_MESSAGE: &str = "Found too many results for the requested resource.";
const GENERIC_MESSAGE: &str = "Whoops, looks like something went wrong!";

impl PortalError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 展示给访问者的提示信息，不暴露内部细节
    pub fn public_message(&self) -> &str {
        match self {
            PortalError::NotFound(_) => NO_RESULT_MESSAGE,
            PortalError::Ambiguous(_) => MULTIPLE_RESULTS_MESSAGE,
            PortalError::Forbidden(_) => FORBIDDEN_MESSAGE,
            PortalError::Validation(msg) | PortalError::DateParse(msg) => msg,
            _ => GENERIC_MESSAGE,
        }
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

impl ResponseError for PortalError {
    fn status_code(&self) -> StatusCode {
        match self {
            PortalError::Forbidden(_) => StatusCode::FORBIDDEN,
            PortalError::Validation(_) | PortalError::DateParse(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // 没有请求上下文时（例如中间件内）使用嵌入模板和匿名导航
    fn error_response(&self) -> HttpResponse {
        self.render_page(&Templates::embedded(), None)
    }
}

impl PortalError {
    /// 记录日志并渲染错误页，导航栏按当前登录身份显示
    pub fn render_page(&self, templates: &Templates, user: Option<&Tutor>) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("[{}] {}", self.code(), self.format_simple());
        } else {
            tracing::info!("[{}] {}", self.code(), self.format_simple());
        }

        error_page(templates, status, self.public_message(), user)
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PortalError {
    fn from(err: sea_orm::DbErr) -> Self {
        PortalError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PortalError {
    fn from(err: chrono::ParseError) -> Self {
        PortalError::DateParse(format!("Invalid date: {err}"))
    }
}

impl From<actix_session::SessionGetError> for PortalError {
    fn from(err: actix_session::SessionGetError) -> Self {
        PortalError::Session(err.to_string())
    }
}

impl From<actix_session::SessionInsertError> for PortalError {
    fn from(err: actix_session::SessionInsertError) -> Self {
        PortalError::Session(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PortalError::database_config("test").code(), "E001");
        assert_eq!(PortalError::not_found("test").code(), "E004");
        assert_eq!(PortalError::validation("test").code(), "E006");
        assert_eq!(PortalError::forbidden("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PortalError::ambiguous("test").error_type(),
            "Ambiguous Result"
        );
        assert_eq!(
            PortalError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PortalError::forbidden("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            PortalError::date_parse("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PortalError::not_found("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            PortalError::ambiguous("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_internals() {
        let err = PortalError::database_operation("UNIQUE constraint failed: tutors.email");
        assert_eq!(err.public_message(), GENERIC_MESSAGE);
        assert_eq!(
            PortalError::not_found("semester 7").public_message(),
            NO_RESULT_MESSAGE
        );
        assert_eq!(
            PortalError::ambiguous("semester 7").public_message(),
            MULTIPLE_RESULTS_MESSAGE
        );
    }

    #[test]
    fn test_format_simple() {
        let err = PortalError::validation("Invalid year");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid year"));
    }
}
