//! 后台管理
//!
//! 六类实体共用同一套列表页、编辑页和表单提交流程，
//! 差异只在于每类实体收集哪些字段。

mod courses;
mod problems;
mod professors;
mod sections;
mod semesters;
mod tutors;

use std::str::FromStr;

use actix_web::HttpResponse;
use tracing::info;

use crate::errors::Result;
use crate::models::{FormFields, tutors::entities::Tutor};
use crate::render::{
    PageContext,
    html::{header_row, list_row},
};
use crate::runtime::AppContext;
use crate::services::pages::{page, redirect};

/// 后台管理的实体类别，对应 `/admin/{kind}/` 路径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminKind {
    Semesters,
    Professors,
    Courses,
    Sections,
    Tutors,
    Problems,
}

impl AdminKind {
    pub fn slug(self) -> &'static str {
        match self {
            AdminKind::Semesters => "semesters",
            AdminKind::Professors => "professors",
            AdminKind::Courses => "courses",
            AdminKind::Sections => "sections",
            AdminKind::Tutors => "tutors",
            AdminKind::Problems => "problems",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AdminKind::Semesters => "Semesters",
            AdminKind::Professors => "Professors",
            AdminKind::Courses => "Courses",
            AdminKind::Sections => "Sections",
            AdminKind::Tutors => "Tutors",
            AdminKind::Problems => "Problem Types",
        }
    }

    /// 单数名称，用于编辑页标题
    pub fn noun(self) -> &'static str {
        match self {
            AdminKind::Semesters => "Semester",
            AdminKind::Professors => "Professor",
            AdminKind::Courses => "Course",
            AdminKind::Sections => "Section",
            AdminKind::Tutors => "Tutor",
            AdminKind::Problems => "Problem Type",
        }
    }

    /// 列表页地址，同时是表单提交地址
    pub fn list_path(self) -> String {
        format!("/admin/{}/", self.slug())
    }

    fn template(self) -> &'static str {
        match self {
            AdminKind::Semesters => "edit_semester.html",
            AdminKind::Professors => "edit_professor.html",
            AdminKind::Courses => "edit_course.html",
            AdminKind::Sections => "edit_section.html",
            AdminKind::Tutors => "edit_tutor.html",
            AdminKind::Problems => "edit_problem.html",
        }
    }
}

impl FromStr for AdminKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "semesters" => Ok(AdminKind::Semesters),
            "professors" => Ok(AdminKind::Professors),
            "courses" => Ok(AdminKind::Courses),
            "sections" => Ok(AdminKind::Sections),
            "tutors" => Ok(AdminKind::Tutors),
            "problems" => Ok(AdminKind::Problems),
            _ => Err(format!("Unknown admin section: '{s}'")),
        }
    }
}

/// 列表页内容
pub(crate) struct ListPage {
    headers: &'static [&'static str],
    rows: Vec<(i64, Vec<String>)>,
}

const DELETE_BUTTON: &str =
    r#"<button type="submit" name="action" value="delete" formnovalidate>Delete</button>"#;

pub struct AdminService<'a> {
    ctx: &'a AppContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    // 后台首页
    pub fn index(&self, user: Option<&Tutor>) -> Result<HttpResponse> {
        page(self.ctx, "Admin", "admin.html", &PageContext::new(), user)
    }

    // 列表页
    pub async fn list(&self, kind: AdminKind, user: Option<&Tutor>) -> Result<HttpResponse> {
        let storage = self.ctx.storage.as_ref();
        let list = match kind {
            AdminKind::Semesters => semesters::list(storage).await?,
            AdminKind::Professors => professors::list(storage).await?,
            AdminKind::Courses => courses::list(storage).await?,
            AdminKind::Sections => sections::list(storage).await?,
            AdminKind::Tutors => tutors::list(storage).await?,
            AdminKind::Problems => problems::list(storage).await?,
        };

        let list_path = kind.list_path();
        let rows: String = list
            .rows
            .iter()
            .map(|(id, cells)| list_row(&format!("{list_path}{id}"), cells))
            .collect();

        let context = PageContext::new()
            .with("heading", kind.heading())
            .with("new_href", format!("{list_path}new"))
            .with_html("header", header_row(list.headers))
            .with_html("rows", rows);
        page(self.ctx, kind.heading(), "list.html", &context, user)
    }

    // 编辑页，id 为空时是新建表单
    pub async fn edit_form(
        &self,
        kind: AdminKind,
        id: Option<i64>,
        user: Option<&Tutor>,
    ) -> Result<HttpResponse> {
        let storage = self.ctx.storage.as_ref();
        let mut context = match kind {
            AdminKind::Semesters => semesters::form(storage, id).await?,
            AdminKind::Professors => professors::form(storage, id).await?,
            AdminKind::Courses => courses::form(storage, id).await?,
            AdminKind::Sections => sections::form(storage, id).await?,
            AdminKind::Tutors => tutors::form(storage, id).await?,
            AdminKind::Problems => problems::form(storage, id).await?,
        };

        context.insert("heading", kind.heading());
        context.insert("list_href", kind.list_path());
        match id {
            Some(id) => {
                context.insert("id", id);
                context.insert_html("delete_button", DELETE_BUTTON);
            }
            None => context.insert("id", ""),
        }

        let title = match id {
            Some(_) => format!("Edit {}", kind.noun()),
            None => format!("New {}", kind.noun()),
        };
        page(self.ctx, &title, kind.template(), &context, user)
    }

    // 表单提交：删除或新建/更新，完成后回到列表页
    pub async fn submit(&self, kind: AdminKind, fields: FormFields) -> Result<HttpResponse> {
        let storage = self.ctx.storage.as_ref();

        if fields.is_delete() {
            if let Some(id) = fields.id()? {
                let deleted = match kind {
                    AdminKind::Semesters => storage.delete_semester(id).await?,
                    AdminKind::Professors => storage.delete_professor(id).await?,
                    AdminKind::Courses => storage.delete_course(id).await?,
                    AdminKind::Sections => storage.delete_section(id).await?,
                    AdminKind::Tutors => storage.delete_tutor(id).await?,
                    AdminKind::Problems => storage.delete_problem_type(id).await?,
                };
                info!("Delete {} {}: removed={}", kind.slug(), id, deleted);
            }
            return Ok(redirect(&kind.list_path()));
        }

        match kind {
            AdminKind::Semesters => semesters::save(storage, &fields).await?,
            AdminKind::Professors => professors::save(storage, &fields).await?,
            AdminKind::Courses => courses::save(storage, &fields).await?,
            AdminKind::Sections => sections::save(storage, &fields).await?,
            AdminKind::Tutors => tutors::save(storage, &fields).await?,
            AdminKind::Problems => problems::save(storage, &fields).await?,
        }

        Ok(redirect(&kind.list_path()))
    }
}
