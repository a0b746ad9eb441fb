use actix_web::HttpResponse;
use tracing::debug;

use super::redirect;

// 工单提交流程尚未开放，两个入口都回到首页

pub fn handle_open_ticket() -> HttpResponse {
    redirect("/")
}

pub fn handle_close_ticket(ticket_id: &str) -> HttpResponse {
    debug!("Close requested for ticket {}", ticket_id);
    redirect("/")
}
