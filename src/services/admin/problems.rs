use crate::errors::Result;
use crate::models::FormFields;
use crate::models::problem_types::requests::ProblemTypeForm;
use crate::render::PageContext;
use crate::storage::Storage;

use super::ListPage;

pub(crate) async fn list(storage: &dyn Storage) -> Result<ListPage> {
    let rows = storage
        .list_problem_types()
        .await?
        .into_iter()
        .map(|p| (p.id, vec![p.description]))
        .collect();

    Ok(ListPage {
        headers: &["Description"],
        rows,
    })
}

pub(crate) async fn form(storage: &dyn Storage, id: Option<i64>) -> Result<PageContext> {
    let mut context = PageContext::new();
    if let Some(id) = id {
        let problem_type = storage
            .get_problem_type(id)
            .await?
            .into_result(format!("problem type {id}"))?;
        context.insert("description", problem_type.description);
    }
    Ok(context)
}

pub(crate) async fn save(storage: &dyn Storage, fields: &FormFields) -> Result<()> {
    let form = ProblemTypeForm::try_from(fields)?;
    storage.edit_problem_type(form, fields.id()?).await?;
    Ok(())
}
