use std::collections::HashMap;

use crate::errors::Result;
use crate::models::FormFields;
use crate::models::sections::{entities::Section, requests::SectionForm};
use crate::render::{PageContext, html::options};
use crate::storage::Storage;

use super::ListPage;

pub(crate) async fn list(storage: &dyn Storage) -> Result<ListPage> {
    let courses: HashMap<i64, String> = storage
        .list_courses()
        .await?
        .into_iter()
        .map(|c| (c.id, c.number))
        .collect();
    let semesters: HashMap<i64, String> = storage
        .list_semesters()
        .await?
        .into_iter()
        .map(|s| (s.id, s.title()))
        .collect();
    let professors: HashMap<i64, String> = storage
        .list_professors()
        .await?
        .into_iter()
        .map(|p| (p.id, p.last_first()))
        .collect();

    let rows = storage
        .list_sections()
        .await?
        .into_iter()
        .map(|s| {
            let course = courses.get(&s.course_id).cloned().unwrap_or_default();
            let semester = semesters.get(&s.semester_id).cloned().unwrap_or_default();
            let professor = s
                .professor_id
                .and_then(|id| professors.get(&id).cloned())
                .unwrap_or_default();
            (s.id, vec![s.number, course, semester, professor])
        })
        .collect();

    Ok(ListPage {
        headers: &["Section", "Course", "Semester", "Professor"],
        rows,
    })
}

pub(crate) async fn form(storage: &dyn Storage, id: Option<i64>) -> Result<PageContext> {
    let section: Option<Section> = match id {
        Some(id) => Some(
            storage
                .get_section(id)
                .await?
                .into_result(format!("section {id}"))?,
        ),
        None => None,
    };

    let selected_course = section.as_ref().map(|s| s.course_id.to_string());
    let selected_semester = section.as_ref().map(|s| s.semester_id.to_string());
    let selected_professor = section
        .as_ref()
        .and_then(|s| s.professor_id)
        .map(|id| id.to_string());

    let course_options = options(
        storage
            .list_courses()
            .await?
            .into_iter()
            .map(|c| (c.id, c.label())),
        selected_course.as_deref(),
    );
    let semester_options = options(
        storage
            .list_semesters()
            .await?
            .into_iter()
            .map(|s| (s.id, s.title())),
        selected_semester.as_deref(),
    );
    let professor_options = options(
        storage
            .list_professors()
            .await?
            .into_iter()
            .map(|p| (p.id, p.last_first())),
        selected_professor.as_deref(),
    );

    let mut context = PageContext::new()
        .with_html("course_options", course_options)
        .with_html("semester_options", semester_options)
        .with_html("professor_options", professor_options);
    if let Some(section) = section {
        context.insert("number", section.number);
    }
    Ok(context)
}

pub(crate) async fn save(storage: &dyn Storage, fields: &FormFields) -> Result<()> {
    let form = SectionForm::try_from(fields)?;
    storage.edit_section(form, fields.id()?).await?;
    Ok(())
}
