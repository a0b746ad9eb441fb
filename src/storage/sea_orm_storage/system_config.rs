//! 运行时配置存储实现

use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use super::{SeaOrmStorage, fetch_one};
use crate::entity::config::ActiveModel;
use crate::entity::prelude::Config;
use crate::errors::{PortalError, Result};
use crate::models::system::entities::ConfigEntry;
use crate::storage::Fetched;

impl SeaOrmStorage {
    pub(crate) async fn get_config_impl(&self, name: &str) -> Result<Fetched<ConfigEntry>> {
        Ok(fetch_one(Config::find_by_id(name.to_string()), &self.db)
            .await?
            .map(|m| m.into_entry()))
    }

    pub(crate) async fn create_config_impl(&self, name: &str, value: &str) -> Result<ConfigEntry> {
        let model = ActiveModel {
            name: Set(name.to_string()),
            value: Set(value.to_string()),
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("写入配置 {name} 失败: {e}")))?;

        Ok(created.into_entry())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::{Fetched, Storage};

    #[actix_web::test]
    async fn test_config_round_trip() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        assert_eq!(
            storage.get_config("PERMANENT_SESSION_LIFETIME").await.unwrap(),
            Fetched::NotFound
        );

        storage
            .create_config("PERMANENT_SESSION_LIFETIME", "30")
            .await
            .unwrap();
        let entry = storage
            .get_config("PERMANENT_SESSION_LIFETIME")
            .await
            .unwrap()
            .found()
            .unwrap();
        assert_eq!(entry.value, "30");

        // 名称是主键，重复写入失败
        assert!(
            storage
                .create_config("PERMANENT_SESSION_LIFETIME", "45")
                .await
                .is_err()
        );
    }
}
