//! 求助工单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_email: String,
    pub student_name: String,
    pub section_id: i64,
    pub assignment: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    pub problem_type_id: Option<i64>,
    pub status: Option<String>,
    pub tutor_id: Option<i64>,
    pub time_created: i64,
    pub time_claimed: Option<i64>,
    pub time_closed: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::Id"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::problem_types::Entity",
        from = "Column::ProblemTypeId",
        to = "super::problem_types::Column::Id"
    )]
    ProblemType,
    #[sea_orm(
        belongs_to = "super::tutors::Entity",
        from = "Column::TutorId",
        to = "super::tutors::Column::Id"
    )]
    Tutor,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::problem_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProblemType.def()
    }
}

impl Related<super::tutors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tutor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_ticket(self) -> crate::models::tickets::entities::Ticket {
        use crate::models::tickets::entities::{Ticket, TicketStatus};
        use chrono::{DateTime, Utc};

        Ticket {
            id: self.id,
            student_email: self.student_email,
            student_name: self.student_name,
            section_id: self.section_id,
            assignment: self.assignment,
            question: self.question,
            problem_type_id: self.problem_type_id,
            // 未知状态按"无状态"处理
            status: self
                .status
                .and_then(|s| s.parse::<TicketStatus>().ok()),
            tutor_id: self.tutor_id,
            time_created: DateTime::<Utc>::from_timestamp(self.time_created, 0).unwrap_or_default(),
            time_claimed: self
                .time_claimed
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            time_closed: self
                .time_closed
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
        }
    }
}
