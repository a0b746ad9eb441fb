use actix_web::HttpResponse;
use chrono::Local;

use super::page;
use crate::errors::Result;
use crate::models::tutors::entities::Tutor;
use crate::render::{PageContext, html::escape};
use crate::runtime::AppContext;

/// 状态页：所有人可见课程辅导情况，登录后额外显示待处理工单
pub async fn handle_status(ctx: &AppContext, user: Option<&Tutor>) -> Result<HttpResponse> {
    let today = Local::now().date_naive();
    let availability = ctx.storage.course_availability(today).await?;

    let availability_rows: String = if availability.is_empty() {
        r#"<tr><td colspan="4">No courses are being tutored right now.</td></tr>"#.to_string()
    } else {
        availability
            .iter()
            .map(|entry| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&entry.course.number),
                    escape(&entry.course.name),
                    entry.tickets,
                    entry.tutors
                )
            })
            .collect()
    };

    let ticket_section = match user {
        Some(_) => {
            let tickets = ctx.storage.list_open_tickets().await?;
            let rows: String = tickets
                .iter()
                .map(|ticket| {
                    format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        escape(&ticket.student_name),
                        escape(&ticket.assignment),
                        escape(&ticket.question),
                        ticket.time_created.format("%Y-%m-%d %H:%M")
                    )
                })
                .collect();
            format!(
                r#"<section>
    <h2>Open tickets</h2>
    <table id="tickets">
        <thead><tr><th>Student</th><th>Assignment</th><th>Question</th><th>Opened</th></tr></thead>
        <tbody>{rows}</tbody>
    </table>
</section>"#
            )
        }
        None => String::new(),
    };

    let context = PageContext::new()
        .with_html("availability_rows", availability_rows)
        .with_html("ticket_section", ticket_section);
    page(ctx, "Status", "status.html", &context, user)
}
