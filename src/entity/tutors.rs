//! 辅导员实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tutors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::can_tutor::Entity")]
    CanTutor,
    #[sea_orm(has_many = "super::tickets::Entity")]
    Tickets,
}

impl Related<super::can_tutor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CanTutor.def()
    }
}

impl Related<super::tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::can_tutor::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::can_tutor::Relation::Tutor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_tutor(self) -> crate::models::tutors::entities::Tutor {
        crate::models::tutors::entities::Tutor {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            is_active: self.is_active,
            is_superuser: self.is_superuser,
        }
    }
}
