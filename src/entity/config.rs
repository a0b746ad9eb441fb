//! 运行时配置实体（name/value）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_entry(self) -> crate::models::system::entities::ConfigEntry {
        crate::models::system::entities::ConfigEntry {
            name: self.name,
            value: self.value,
        }
    }
}
