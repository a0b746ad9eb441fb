use sea_orm::{EntityTrait, QueryOrder, Set};

use super::{SeaOrmStorage, fetch_one};
use crate::entity::problem_types::{ActiveModel, Column, Entity as ProblemTypes};
use crate::errors::{PortalError, Result};
use crate::models::problem_types::{entities::ProblemType, requests::ProblemTypeForm};
use crate::storage::Fetched;

impl SeaOrmStorage {
    pub async fn list_problem_types_impl(&self) -> Result<Vec<ProblemType>> {
        let problem_types = ProblemTypes::find()
            .order_by_asc(Column::Description)
            .all(&self.db)
            .await
            .map_err(|e| {
                PortalError::database_operation(format!("查询问题类型列表失败: {e}"))
            })?;

        Ok(problem_types
            .into_iter()
            .map(|m| m.into_problem_type())
            .collect())
    }

    pub async fn get_problem_type_impl(&self, id: i64) -> Result<Fetched<ProblemType>> {
        Ok(fetch_one(ProblemTypes::find_by_id(id), &self.db)
            .await?
            .map(|m| m.into_problem_type()))
    }

    pub async fn edit_problem_type_impl(
        &self,
        form: ProblemTypeForm,
        id: Option<i64>,
    ) -> Result<ProblemType> {
        let values = ActiveModel {
            description: Set(form.description),
            ..Default::default()
        };

        Ok(self
            .edit_object(values, id, "problem type")
            .await?
            .into_problem_type())
    }

    pub async fn delete_problem_type_impl(&self, id: i64) -> Result<bool> {
        let result = ProblemTypes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除问题类型失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
