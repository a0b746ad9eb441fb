//! 课程班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub number: String,
    pub course_id: i64,
    pub semester_id: i64,
    pub professor_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::semesters::Entity",
        from = "Column::SemesterId",
        to = "super::semesters::Column::Id"
    )]
    Semester,
    #[sea_orm(
        belongs_to = "super::professors::Entity",
        from = "Column::ProfessorId",
        to = "super::professors::Column::Id"
    )]
    Professor,
    #[sea_orm(has_many = "super::tickets::Entity")]
    Tickets,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::semesters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_section(self) -> crate::models::sections::entities::Section {
        crate::models::sections::entities::Section {
            id: self.id,
            number: self.number,
            course_id: self.course_id,
            semester_id: self.semester_id,
            professor_id: self.professor_id,
        }
    }
}
