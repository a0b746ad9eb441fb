use crate::errors::Result;
use crate::models::FormFields;
use crate::models::courses::requests::CourseForm;
use crate::render::{PageContext, html::checked};
use crate::storage::Storage;

use super::ListPage;

pub(crate) async fn list(storage: &dyn Storage) -> Result<ListPage> {
    let rows = storage
        .list_courses()
        .await?
        .into_iter()
        .map(|c| {
            let shown = if c.on_display { "Yes" } else { "No" };
            (c.id, vec![c.number, c.name, shown.to_string()])
        })
        .collect();

    Ok(ListPage {
        headers: &["Number", "Name", "Shown"],
        rows,
    })
}

pub(crate) async fn form(storage: &dyn Storage, id: Option<i64>) -> Result<PageContext> {
    let mut context = PageContext::new();
    match id {
        Some(id) => {
            let course = storage
                .get_course(id)
                .await?
                .into_result(format!("course {id}"))?;
            context.insert("number", course.number);
            context.insert("name", course.name);
            context.insert_html("on_display", checked(course.on_display));
        }
        // 新课程默认展示
        None => context.insert_html("on_display", checked(true)),
    }
    Ok(context)
}

pub(crate) async fn save(storage: &dyn Storage, fields: &FormFields) -> Result<()> {
    let form = CourseForm::try_from(fields)?;
    storage.edit_course(form, fields.id()?).await?;
    Ok(())
}
