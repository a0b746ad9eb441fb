//! 问题类型实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "problem_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tickets::Entity")]
    Tickets,
}

impl Related<super::tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_problem_type(self) -> crate::models::problem_types::entities::ProblemType {
        crate::models::problem_types::entities::ProblemType {
            id: self.id,
            description: self.description,
        }
    }
}
