//! 报表查询：未处理工单与课程辅导可用性

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use super::SeaOrmStorage;
use crate::entity::prelude::{CanTutor, Courses, Tickets};
use crate::entity::{can_tutor, courses, sections, semesters, tickets, tutors};
use crate::errors::{PortalError, Result};
use crate::models::reports::responses::CourseAvailability;
use crate::models::tickets::entities::{Ticket, TicketStatus};

/// 学期日期范围包含 `today`
fn semester_contains(today: NaiveDate) -> Condition {
    Condition::all()
        .add(semesters::Column::StartDate.lte(today))
        .add(semesters::Column::EndDate.gte(today))
}

impl SeaOrmStorage {
    /// 状态为空或 open 的工单，按创建时间排序
    pub async fn list_open_tickets_impl(&self) -> Result<Vec<Ticket>> {
        let tickets = Tickets::find()
            .filter(
                Condition::any()
                    .add(tickets::Column::Status.is_null())
                    .add(tickets::Column::Status.eq(TicketStatus::OPEN)),
            )
            .order_by_asc(tickets::Column::TimeCreated)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询工单列表失败: {e}")))?;

        Ok(tickets.into_iter().map(|m| m.into_ticket()).collect())
    }

    /// 当前学期内展示中的课程，附带未关闭工单数与在职辅导员数
    pub async fn course_availability_impl(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<CourseAvailability>> {
        let active_courses = Courses::find()
            .join(JoinType::InnerJoin, courses::Relation::Sections.def())
            .join(JoinType::InnerJoin, sections::Relation::Semester.def())
            .filter(courses::Column::OnDisplay.eq(true))
            .filter(semester_contains(today))
            .distinct()
            .order_by_asc(courses::Column::Number)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询当前课程失败: {e}")))?;

        if active_courses.is_empty() {
            return Ok(Vec::new());
        }

        // 每门课程在当前学期内状态为空、open 或 claimed 的工单数
        let ticket_counts: HashMap<i64, i64> = Tickets::find()
            .select_only()
            .column(sections::Column::CourseId)
            .column_as(tickets::Column::Id.count(), "tickets")
            .join(JoinType::InnerJoin, tickets::Relation::Section.def())
            .join(JoinType::InnerJoin, sections::Relation::Semester.def())
            .filter(semester_contains(today))
            .filter(
                Condition::any()
                    .add(tickets::Column::Status.is_null())
                    .add(
                        tickets::Column::Status
                            .is_in([TicketStatus::OPEN, TicketStatus::CLAIMED]),
                    ),
            )
            .group_by(sections::Column::CourseId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计工单数量失败: {e}")))?
            .into_iter()
            .collect();

        // 每门课程的在职辅导员数
        let tutor_counts: HashMap<i64, i64> = CanTutor::find()
            .select_only()
            .column(can_tutor::Column::CourseId)
            .column_as(can_tutor::Column::TutorId.count(), "tutors")
            .join(JoinType::InnerJoin, can_tutor::Relation::Tutor.def())
            .filter(tutors::Column::IsActive.eq(true))
            .group_by(can_tutor::Column::CourseId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计辅导员数量失败: {e}")))?
            .into_iter()
            .collect();

        Ok(active_courses
            .into_iter()
            .map(|course| CourseAvailability {
                tickets: ticket_counts.get(&course.id).copied().unwrap_or(0),
                tutors: tutor_counts.get(&course.id).copied().unwrap_or(0),
                course: course.into_course(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Utc};
    use sea_orm::{ActiveModelTrait, Set};

    use crate::entity::prelude::TicketActiveModel;
    use crate::models::courses::requests::CourseForm;
    use crate::models::sections::requests::SectionForm;
    use crate::models::semesters::{entities::Season, requests::SemesterForm};
    use crate::models::tickets::entities::TicketStatus;
    use crate::models::tutors::requests::TutorForm;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn semester(storage: &SeaOrmStorage, start: NaiveDate, end: NaiveDate) -> i64 {
        storage
            .edit_semester(
                SemesterForm {
                    year: start.year(),
                    season: Season::Spring,
                    start_date: start,
                    end_date: end,
                },
                None,
            )
            .await
            .unwrap()
            .id
    }

    async fn course(storage: &SeaOrmStorage, number: &str, on_display: bool) -> i64 {
        storage
            .edit_course(
                CourseForm {
                    number: number.into(),
                    name: format!("Course {number}"),
                    on_display,
                },
                None,
            )
            .await
            .unwrap()
            .id
    }

    async fn section(storage: &SeaOrmStorage, number: &str, course_id: i64, semester_id: i64) -> i64 {
        storage
            .edit_section(
                SectionForm {
                    number: number.into(),
                    course_id,
                    semester_id,
                    professor_id: None,
                },
                None,
            )
            .await
            .unwrap()
            .id
    }

    async fn tutor(storage: &SeaOrmStorage, email: &str, is_active: bool, course_ids: Vec<i64>) {
        storage
            .edit_tutor(
                TutorForm {
                    email: email.into(),
                    first_name: "Pat".into(),
                    last_name: "Tutor".into(),
                    is_active,
                    is_superuser: false,
                    course_ids,
                },
                None,
            )
            .await
            .unwrap();
    }

    async fn ticket(storage: &SeaOrmStorage, section_id: i64, status: Option<TicketStatus>) {
        TicketActiveModel {
            student_email: Set("student@unomaha.edu".into()),
            student_name: Set("Sam Student".into()),
            section_id: Set(section_id),
            assignment: Set("Homework 1".into()),
            question: Set("Why does my loop never end?".into()),
            problem_type_id: Set(None),
            status: Set(status.map(|s| s.to_string())),
            tutor_id: Set(None),
            time_created: Set(Utc::now().timestamp()),
            time_claimed: Set(None),
            time_closed: Set(None),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();
    }

    #[actix_web::test]
    async fn test_course_availability_counts() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        let current = semester(&storage, date(2024, 1, 10), date(2024, 5, 10)).await;
        let past = semester(&storage, date(2023, 8, 20), date(2023, 12, 15)).await;

        let shown = course(&storage, "CSCI 1620", true).await;
        let hidden = course(&storage, "CSCI 2240", false).await;
        let old = course(&storage, "CSCI 3320", true).await;

        let s1 = section(&storage, "001", shown, current).await;
        let s2 = section(&storage, "002", shown, current).await;
        section(&storage, "001", hidden, current).await;
        let s_old = section(&storage, "001", old, past).await;

        tutor(&storage, "active@unomaha.edu", true, vec![shown, old]).await;
        tutor(&storage, "inactive@unomaha.edu", false, vec![shown]).await;

        ticket(&storage, s1, None).await;
        ticket(&storage, s1, Some(TicketStatus::Open)).await;
        ticket(&storage, s2, Some(TicketStatus::Claimed)).await;
        ticket(&storage, s2, Some(TicketStatus::Closed)).await;
        ticket(&storage, s_old, None).await;

        let availability = storage.course_availability(date(2024, 3, 1)).await.unwrap();
        assert_eq!(availability.len(), 1);
        assert_eq!(availability[0].course.id, shown);
        assert_eq!(availability[0].tickets, 3);
        assert_eq!(availability[0].tutors, 1);

        // 学期之外没有任何课程
        assert!(
            storage
                .course_availability(date(2024, 6, 1))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[actix_web::test]
    async fn test_open_tickets_excludes_claimed_and_closed() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        let current = semester(&storage, date(2024, 1, 10), date(2024, 5, 10)).await;
        let shown = course(&storage, "CSCI 1620", true).await;
        let s1 = section(&storage, "001", shown, current).await;

        ticket(&storage, s1, None).await;
        ticket(&storage, s1, Some(TicketStatus::Open)).await;
        ticket(&storage, s1, Some(TicketStatus::Claimed)).await;
        ticket(&storage, s1, Some(TicketStatus::Closed)).await;

        let open = storage.list_open_tickets().await.unwrap();
        assert_eq!(open.len(), 2);
        assert!(
            open.iter()
                .all(|t| t.status.is_none() || t.status == Some(TicketStatus::Open))
        );
    }
}
