use crate::errors::Result;
use crate::models::FormFields;
use crate::models::semesters::{
    entities::{Season, Semester},
    requests::SemesterForm,
};
use crate::render::{PageContext, html::options};
use crate::storage::Storage;

use super::ListPage;

pub(crate) async fn list(storage: &dyn Storage) -> Result<ListPage> {
    let rows = storage
        .list_semesters()
        .await?
        .into_iter()
        .map(|s| {
            (
                s.id,
                vec![
                    s.title(),
                    s.start_date.to_string(),
                    s.end_date.to_string(),
                ],
            )
        })
        .collect();

    Ok(ListPage {
        headers: &["Semester", "Start", "End"],
        rows,
    })
}

pub(crate) async fn form(storage: &dyn Storage, id: Option<i64>) -> Result<PageContext> {
    let semester: Option<Semester> = match id {
        Some(id) => Some(
            storage
                .get_semester(id)
                .await?
                .into_result(format!("semester {id}"))?,
        ),
        None => None,
    };

    let selected = semester.as_ref().map(|s| s.season.code().to_string());
    let seasons = options(
        Season::all().iter().map(|s| (s.code(), s.to_string())),
        selected.as_deref(),
    );

    let mut context = PageContext::new().with_html("season_options", seasons);
    if let Some(semester) = semester {
        context.insert("year", semester.year);
        context.insert("start_date", semester.start_date);
        context.insert("end_date", semester.end_date);
    }
    Ok(context)
}

pub(crate) async fn save(storage: &dyn Storage, fields: &FormFields) -> Result<()> {
    let form = SemesterForm::try_from(fields)?;
    storage.edit_semester(form, fields.id()?).await?;
    Ok(())
}
