//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub number: String,
    pub name: String,
    pub on_display: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sections::Entity")]
    Sections,
    #[sea_orm(has_many = "super::can_tutor::Entity")]
    CanTutor,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl Related<super::can_tutor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CanTutor.def()
    }
}

// 课程 <-> 辅导员 多对多，经由 can_tutor
impl Related<super::tutors::Entity> for Entity {
    fn to() -> RelationDef {
        super::can_tutor::Relation::Tutor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::can_tutor::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        crate::models::courses::entities::Course {
            id: self.id,
            number: self.number,
            name: self.name,
            on_display: self.on_display,
        }
    }
}
