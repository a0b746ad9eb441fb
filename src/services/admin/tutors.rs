use crate::errors::Result;
use crate::models::FormFields;
use crate::models::tutors::{
    entities::Tutor,
    requests::{COURSE_FIELD_PREFIX, TutorForm},
};
use crate::render::{
    PageContext,
    html::{checked, escape},
};
use crate::storage::Storage;

use super::ListPage;

pub(crate) async fn list(storage: &dyn Storage) -> Result<ListPage> {
    let rows = storage
        .list_tutors()
        .await?
        .into_iter()
        .map(|t| {
            let role = match (t.is_active, t.is_superuser) {
                (false, _) => "Inactive",
                (true, true) => "Administrator",
                (true, false) => "Tutor",
            };
            (t.id, vec![t.email.clone(), t.last_first(), role.to_string()])
        })
        .collect();

    Ok(ListPage {
        headers: &["Email", "Name", "Role"],
        rows,
    })
}

pub(crate) async fn form(storage: &dyn Storage, id: Option<i64>) -> Result<PageContext> {
    let (tutor, can_tutor): (Option<Tutor>, Vec<i64>) = match id {
        Some(id) => {
            let tutor = storage
                .get_tutor(id)
                .await?
                .into_result(format!("tutor {id}"))?;
            let courses = storage.list_tutor_courses(id).await?;
            (Some(tutor), courses)
        }
        None => (None, Vec::new()),
    };

    let course_checkboxes: String = storage
        .list_courses()
        .await?
        .into_iter()
        .map(|course| {
            format!(
                r#"<label><input type="checkbox" name="{COURSE_FIELD_PREFIX}{}" {}> {}</label>"#,
                course.id,
                checked(can_tutor.contains(&course.id)),
                escape(&course.number)
            )
        })
        .collect();

    let mut context = PageContext::new().with_html("course_checkboxes", course_checkboxes);
    match tutor {
        Some(tutor) => {
            context.insert("email", tutor.email);
            context.insert("first_name", tutor.first_name);
            context.insert("last_name", tutor.last_name);
            context.insert_html("is_active", checked(tutor.is_active));
            context.insert_html("is_superuser", checked(tutor.is_superuser));
        }
        None => context.insert_html("is_active", checked(true)),
    }
    Ok(context)
}

pub(crate) async fn save(storage: &dyn Storage, fields: &FormFields) -> Result<()> {
    let form = TutorForm::try_from(fields)?;
    storage.edit_tutor(form, fields.id()?).await?;
    Ok(())
}
