use sea_orm::{EntityTrait, QueryOrder, Set};

use super::{SeaOrmStorage, fetch_one};
use crate::entity::semesters::{ActiveModel, Column, Entity as Semesters};
use crate::errors::{PortalError, Result};
use crate::models::semesters::{entities::Semester, requests::SemesterForm};
use crate::storage::Fetched;

impl SeaOrmStorage {
    /// 列出学期（按年份、季节排序）
    pub async fn list_semesters_impl(&self) -> Result<Vec<Semester>> {
        let semesters = Semesters::find()
            .order_by_asc(Column::Year)
            .order_by_asc(Column::Season)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(semesters.into_iter().map(|m| m.into_semester()).collect())
    }

    pub async fn get_semester_impl(&self, id: i64) -> Result<Fetched<Semester>> {
        Ok(fetch_one(Semesters::find_by_id(id), &self.db)
            .await?
            .map(|m| m.into_semester()))
    }

    pub async fn edit_semester_impl(
        &self,
        form: SemesterForm,
        id: Option<i64>,
    ) -> Result<Semester> {
        let values = ActiveModel {
            year: Set(form.year),
            season: Set(form.season.code()),
            start_date: Set(form.start_date),
            end_date: Set(form.end_date),
            ..Default::default()
        };

        Ok(self.edit_object(values, id, "semester").await?.into_semester())
    }

    pub async fn delete_semester_impl(&self, id: i64) -> Result<bool> {
        let result = Semesters::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除学期失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
