use actix_web::HttpResponse;

use super::page;
use crate::errors::Result;
use crate::models::tutors::entities::Tutor;
use crate::render::PageContext;
use crate::runtime::AppContext;

pub fn handle_home(ctx: &AppContext, user: Option<&Tutor>) -> Result<HttpResponse> {
    let greeting = match user {
        Some(tutor) => format!("Welcome back, {}.", tutor.first_name),
        None => format!("Welcome to the {}.", ctx.templates.system_name()),
    };

    let context = PageContext::new().with("greeting", greeting);
    page(ctx, "Home", "index.html", &context, user)
}
