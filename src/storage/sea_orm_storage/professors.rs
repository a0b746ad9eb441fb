use sea_orm::{EntityTrait, QueryOrder, Set};

use super::{SeaOrmStorage, fetch_one};
use crate::entity::professors::{ActiveModel, Column, Entity as Professors};
use crate::errors::{PortalError, Result};
use crate::models::professors::{entities::Professor, requests::ProfessorForm};
use crate::storage::Fetched;

impl SeaOrmStorage {
    /// 列出教授（按姓、名排序）
    pub async fn list_professors_impl(&self) -> Result<Vec<Professor>> {
        let professors = Professors::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教授列表失败: {e}")))?;

        Ok(professors.into_iter().map(|m| m.into_professor()).collect())
    }

    pub async fn get_professor_impl(&self, id: i64) -> Result<Fetched<Professor>> {
        Ok(fetch_one(Professors::find_by_id(id), &self.db)
            .await?
            .map(|m| m.into_professor()))
    }

    pub async fn edit_professor_impl(
        &self,
        form: ProfessorForm,
        id: Option<i64>,
    ) -> Result<Professor> {
        let values = ActiveModel {
            first_name: Set(form.first_name),
            last_name: Set(form.last_name),
            ..Default::default()
        };

        Ok(self
            .edit_object(values, id, "professor")
            .await?
            .into_professor())
    }

    pub async fn delete_professor_impl(&self, id: i64) -> Result<bool> {
        let result = Professors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除教授失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::professors::requests::ProfessorForm;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    fn form(first: &str, last: &str) -> ProfessorForm {
        ProfessorForm {
            first_name: first.into(),
            last_name: last.into(),
        }
    }

    #[actix_web::test]
    async fn test_list_orders_by_last_then_first_name() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        storage.edit_professor(form("Zoe", "Adams"), None).await.unwrap();
        storage.edit_professor(form("Alan", "Turing"), None).await.unwrap();
        storage.edit_professor(form("Ada", "Adams"), None).await.unwrap();

        let names: Vec<String> = storage
            .list_professors()
            .await
            .unwrap()
            .iter()
            .map(|p| p.last_first())
            .collect();
        assert_eq!(names, vec!["Adams, Ada", "Adams, Zoe", "Turing, Alan"]);
    }
}
