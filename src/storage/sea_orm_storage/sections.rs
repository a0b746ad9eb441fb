use sea_orm::{EntityTrait, QueryOrder, Set};

use super::{SeaOrmStorage, fetch_one};
use crate::entity::sections::{ActiveModel, Column, Entity as Sections};
use crate::errors::{PortalError, Result};
use crate::models::sections::{entities::Section, requests::SectionForm};
use crate::storage::Fetched;

impl SeaOrmStorage {
    /// 列出课程班级（按班级号排序）
    pub async fn list_sections_impl(&self) -> Result<Vec<Section>> {
        let sections = Sections::find()
            .order_by_asc(Column::Number)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(sections.into_iter().map(|m| m.into_section()).collect())
    }

    pub async fn get_section_impl(&self, id: i64) -> Result<Fetched<Section>> {
        Ok(fetch_one(Sections::find_by_id(id), &self.db)
            .await?
            .map(|m| m.into_section()))
    }

    pub async fn edit_section_impl(&self, form: SectionForm, id: Option<i64>) -> Result<Section> {
        let values = ActiveModel {
            number: Set(form.number),
            course_id: Set(form.course_id),
            semester_id: Set(form.semester_id),
            professor_id: Set(form.professor_id),
            ..Default::default()
        };

        Ok(self.edit_object(values, id, "section").await?.into_section())
    }

    pub async fn delete_section_impl(&self, id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
