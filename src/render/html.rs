//! HTML 片段拼接

/// 转义 HTML 特殊字符
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 复选框的 checked 属性
pub fn checked(on: bool) -> &'static str {
    if on { "checked" } else { "" }
}

/// 生成下拉框选项，`selected` 为当前值
pub fn options<I, V, L>(items: I, selected: Option<&str>) -> String
where
    I: IntoIterator<Item = (V, L)>,
    V: ToString,
    L: AsRef<str>,
{
    items
        .into_iter()
        .map(|(value, label)| {
            let value = value.to_string();
            let mark = if selected == Some(value.as_str()) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{mark}>{}</option>"#,
                escape(&value),
                escape(label.as_ref())
            )
        })
        .collect()
}

/// 生成一行表格，第一列链接到编辑页
pub fn list_row(href: &str, cells: &[String]) -> String {
    let mut row = String::from("<tr>");
    for (i, cell) in cells.iter().enumerate() {
        if i == 0 {
            row.push_str(&format!(
                r#"<td><a href="{}">{}</a></td>"#,
                escape(href),
                escape(cell)
            ));
        } else {
            row.push_str(&format!("<td>{}</td>", escape(cell)));
        }
    }
    row.push_str("</tr>");
    row
}

/// 生成表头
pub fn header_row(headers: &[&str]) -> String {
    let cells: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    format!("<tr>{cells}</tr>")
}
