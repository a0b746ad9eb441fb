use sea_orm::{EntityTrait, QueryOrder, Set};

use super::{SeaOrmStorage, fetch_one};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{PortalError, Result};
use crate::models::courses::{entities::Course, requests::CourseForm};
use crate::storage::Fetched;

impl SeaOrmStorage {
    /// 列出课程（按课程号排序）
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Number)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    pub async fn get_course_impl(&self, id: i64) -> Result<Fetched<Course>> {
        Ok(fetch_one(Courses::find_by_id(id), &self.db)
            .await?
            .map(|m| m.into_course()))
    }

    pub async fn edit_course_impl(&self, form: CourseForm, id: Option<i64>) -> Result<Course> {
        let values = ActiveModel {
            number: Set(form.number),
            name: Set(form.name),
            on_display: Set(form.on_display),
            ..Default::default()
        };

        Ok(self.edit_object(values, id, "course").await?.into_course())
    }

    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
