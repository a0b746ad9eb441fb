use crate::errors::Result;
use crate::models::FormFields;
use crate::models::professors::requests::ProfessorForm;
use crate::render::PageContext;
use crate::storage::Storage;

use super::ListPage;

pub(crate) async fn list(storage: &dyn Storage) -> Result<ListPage> {
    let rows = storage
        .list_professors()
        .await?
        .into_iter()
        .map(|p| (p.id, vec![p.last_first()]))
        .collect();

    Ok(ListPage {
        headers: &["Name"],
        rows,
    })
}

pub(crate) async fn form(storage: &dyn Storage, id: Option<i64>) -> Result<PageContext> {
    let mut context = PageContext::new();
    if let Some(id) = id {
        let professor = storage
            .get_professor(id)
            .await?
            .into_result(format!("professor {id}"))?;
        context.insert("first_name", professor.first_name);
        context.insert("last_name", professor.last_name);
    }
    Ok(context)
}

pub(crate) async fn save(storage: &dyn Storage, fields: &FormFields) -> Result<()> {
    let form = ProfessorForm::try_from(fields)?;
    storage.edit_professor(form, fields.id()?).await?;
    Ok(())
}
