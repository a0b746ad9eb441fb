//! HTML 模板渲染
//!
//! 模板随二进制嵌入，占位符形如 `{{ name }}`。普通值插入前转义，
//! 预先拼好的 HTML 片段原样插入。

pub mod html;
mod templates;

pub use templates::{PageContext, Templates};
