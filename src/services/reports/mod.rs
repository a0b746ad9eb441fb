//! 状态页使用的 JSON 接口

use actix_web::HttpResponse;
use chrono::Local;
use tracing::debug;

use crate::errors::Result;
use crate::models::JsonList;
use crate::runtime::AppContext;

pub struct ReportService<'a> {
    ctx: &'a AppContext,
}

impl<'a> ReportService<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    /// 待处理工单，按创建时间排序
    pub async fn tickets(&self) -> Result<HttpResponse> {
        let tickets = self.ctx.storage.list_open_tickets().await?;
        debug!("Listing {} open ticket(s)", tickets.len());
        Ok(HttpResponse::Ok().json(JsonList::from(tickets)))
    }

    /// 当前学期各课程的工单数与辅导员数
    pub async fn availability(&self) -> Result<HttpResponse> {
        let today = Local::now().date_naive();
        let availability = self.ctx.storage.course_availability(today).await?;
        Ok(HttpResponse::Ok().json(JsonList::from(availability)))
    }
}
