use std::collections::HashMap;
use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rust_embed::Embed;
use tracing::debug;

use super::html::escape;
use crate::errors::{PortalError, Result};

/// 嵌入页面模板
/// 编译时从 templates/ 目录读取文件
#[derive(Embed)]
#[folder = "templates/"]
struct TemplateAssets;

const DEFAULT_SYSTEM_NAME: &str = "CSLC Tutoring Portal";
const TEMPLATE_DIR: &str = "./templates";

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("Invalid placeholder regex")
});

#[derive(Debug, Clone)]
pub struct Templates {
    system_name: String,
    reload: bool,
}

impl Templates {
    /// `reload` 为 true 时每次渲染都从磁盘重新读取模板
    pub fn new(system_name: impl Into<String>, reload: bool) -> Self {
        Self {
            system_name: system_name.into(),
            reload,
        }
    }

    /// 仅使用嵌入模板，供没有应用上下文的错误响应使用
    pub fn embedded() -> Self {
        Self::new(DEFAULT_SYSTEM_NAME, false)
    }

    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    /// 是否从磁盘读取（开发模式）
    pub fn reload(&self) -> bool {
        self.reload
    }

    fn source(&self, name: &str) -> Result<String> {
        if self.reload {
            match std::fs::read_to_string(format!("{TEMPLATE_DIR}/{name}")) {
                Ok(source) => return Ok(source),
                Err(e) => debug!("Template {} not on disk ({}), using embedded copy", name, e),
            }
        }

        TemplateAssets::get(name)
            .map(|file| String::from_utf8_lossy(&file.data).into_owned())
            .ok_or_else(|| PortalError::template(format!("Template not found: {name}")))
    }

    /// 渲染模板，未提供的占位符替换为空
    pub fn render(&self, name: &str, context: &PageContext) -> Result<String> {
        let source = self.source(name)?;
        Ok(context.substitute(&source))
    }
}

/// 模板变量
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    values: HashMap<String, String>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入需要转义的文本
    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// 插入已渲染的 HTML 片段
    pub fn with_html(mut self, key: &str, html: impl Into<String>) -> Self {
        self.insert_html(key, html);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Display) {
        self.values
            .insert(key.to_string(), escape(&value.to_string()));
    }

    pub fn insert_html(&mut self, key: &str, html: impl Into<String>) {
        self.values.insert(key.to_string(), html.into());
    }

    fn substitute(&self, source: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(source, |caps: &Captures| {
                self.values.get(&caps[1]).cloned().unwrap_or_default()
            })
            .into_owned()
    }
}
