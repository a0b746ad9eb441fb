use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::editor::edit_in;
use super::{SeaOrmStorage, fetch_one};
use crate::entity::can_tutor::{
    ActiveModel as CanTutorActiveModel, Column as CanTutorColumn, Entity as CanTutor,
};
use crate::entity::tutors::{ActiveModel, Column, Entity as Tutors};
use crate::errors::{PortalError, Result};
use crate::models::tutors::{entities::Tutor, requests::TutorForm};
use crate::storage::Fetched;

impl SeaOrmStorage {
    /// 通过邮箱查找辅导员（登录身份），邮箱按小写存储
    pub async fn find_tutor_by_email_impl(&self, email: &str) -> Result<Fetched<Tutor>> {
        let email = email.to_lowercase();
        Ok(
            fetch_one(Tutors::find().filter(Column::Email.eq(email)), &self.db)
                .await?
                .map(|m| m.into_tutor()),
        )
    }

    /// 列出辅导员（按邮箱排序）
    pub async fn list_tutors_impl(&self) -> Result<Vec<Tutor>> {
        let tutors = Tutors::find()
            .order_by_asc(Column::Email)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询辅导员列表失败: {e}")))?;

        Ok(tutors.into_iter().map(|m| m.into_tutor()).collect())
    }

    pub async fn get_tutor_impl(&self, id: i64) -> Result<Fetched<Tutor>> {
        Ok(fetch_one(Tutors::find_by_id(id), &self.db)
            .await?
            .map(|m| m.into_tutor()))
    }

    /// 新建或更新辅导员，并整体替换其可辅导课程
    pub async fn edit_tutor_impl(&self, form: TutorForm, id: Option<i64>) -> Result<Tutor> {
        let values = ActiveModel {
            email: Set(form.email),
            first_name: Set(form.first_name),
            last_name: Set(form.last_name),
            is_active: Set(form.is_active),
            is_superuser: Set(form.is_superuser),
            ..Default::default()
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        let tutor = edit_in(&txn, values, id, "tutor").await?;

        CanTutor::delete_many()
            .filter(CanTutorColumn::TutorId.eq(tutor.id))
            .exec(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("清除可辅导课程失败: {e}")))?;

        for course_id in form.course_ids {
            CanTutorActiveModel {
                tutor_id: Set(tutor.id),
                course_id: Set(course_id),
            }
            .insert(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("写入可辅导课程失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(tutor.into_tutor())
    }

    pub async fn delete_tutor_impl(&self, id: i64) -> Result<bool> {
        let result = Tutors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除辅导员失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_tutor_courses_impl(&self, tutor_id: i64) -> Result<Vec<i64>> {
        let rows = CanTutor::find()
            .filter(CanTutorColumn::TutorId.eq(tutor_id))
            .order_by_asc(CanTutorColumn::CourseId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询可辅导课程失败: {e}")))?;

        Ok(rows.into_iter().map(|row| row.course_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::courses::requests::CourseForm;
    use crate::models::tutors::requests::TutorForm;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::{Fetched, Storage, TutorDirectory};

    fn tutor_form(email: &str, course_ids: Vec<i64>) -> TutorForm {
        TutorForm {
            email: email.into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            is_active: true,
            is_superuser: false,
            course_ids,
        }
    }

    async fn course(storage: &SeaOrmStorage, number: &str) -> i64 {
        storage
            .edit_course(
                CourseForm {
                    number: number.into(),
                    name: format!("Course {number}"),
                    on_display: true,
                },
                None,
            )
            .await
            .unwrap()
            .id
    }

    #[actix_web::test]
    async fn test_find_tutor_by_email() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        let created = storage
            .edit_tutor(tutor_form("jdoe@unomaha.edu", vec![]), None)
            .await
            .unwrap();

        assert_eq!(
            storage.find_tutor_by_email("jdoe@unomaha.edu").await.unwrap(),
            Fetched::Found(created.clone())
        );
        assert_eq!(
            storage.find_tutor_by_email("JDoe@UNOmaha.edu").await.unwrap(),
            Fetched::Found(created)
        );
        assert_eq!(
            storage.find_tutor_by_email("other@unomaha.edu").await.unwrap(),
            Fetched::NotFound
        );
    }

    #[actix_web::test]
    async fn test_edit_tutor_replaces_courses() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        let c1 = course(&storage, "CSCI 1620").await;
        let c2 = course(&storage, "CSCI 2240").await;
        let c3 = course(&storage, "CSCI 3320").await;

        let tutor = storage
            .edit_tutor(tutor_form("jdoe@unomaha.edu", vec![c1, c2]), None)
            .await
            .unwrap();
        assert_eq!(storage.list_tutor_courses(tutor.id).await.unwrap(), vec![c1, c2]);

        storage
            .edit_tutor(tutor_form("jdoe@unomaha.edu", vec![c3]), Some(tutor.id))
            .await
            .unwrap();
        assert_eq!(storage.list_tutor_courses(tutor.id).await.unwrap(), vec![c3]);
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        storage
            .edit_tutor(tutor_form("jdoe@unomaha.edu", vec![]), None)
            .await
            .unwrap();
        let err = storage
            .edit_tutor(tutor_form("jdoe@unomaha.edu", vec![]), None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E003");
        assert_eq!(storage.list_tutors().await.unwrap().len(), 1);
    }
}
