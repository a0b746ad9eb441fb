//! 通用编辑器
//!
//! 后台所有实体的新建与更新都经过这里：带 ID 时只写入发生变化的字段，
//! 不带 ID 时插入新行。每次调用恰好提交一次事务。

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, DatabaseTransaction, EntityTrait,
    IntoActiveModel, Iterable, PrimaryKeyTrait, TransactionTrait,
};
use tracing::debug;

use super::{SeaOrmStorage, fetch_one};
use crate::errors::{PortalError, Result};

pub(crate) type ModelOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Model;
type PrimaryKeyOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::PrimaryKey;

impl SeaOrmStorage {
    /// 在独立事务中新建或更新一条记录
    pub(crate) async fn edit_object<A>(
        &self,
        values: A,
        id: Option<i64>,
        what: &str,
    ) -> Result<ModelOf<A>>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
        ModelOf<A>: IntoActiveModel<A>,
        <PrimaryKeyOf<A> as PrimaryKeyTrait>::ValueType: From<i64>,
    {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        let model = edit_in(&txn, values, id, what).await?;

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(model)
    }
}

/// 在调用方的事务中新建或更新，提交由调用方负责
pub(crate) async fn edit_in<A>(
    txn: &DatabaseTransaction,
    values: A,
    id: Option<i64>,
    what: &str,
) -> Result<ModelOf<A>>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    ModelOf<A>: IntoActiveModel<A>,
    <PrimaryKeyOf<A> as PrimaryKeyTrait>::ValueType: From<i64>,
{
    let Some(id) = id else {
        let inserted = values
            .insert(txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("新建{what}失败: {e}")))?;
        debug!("Created {} record", what);
        return Ok(inserted);
    };

    let current = fetch_one(<A::Entity as EntityTrait>::find_by_id(id), txn)
        .await?
        .into_result(format!("{what} {id}"))?;

    let mut active = current.clone().into_active_model();
    let assigned = apply_changes(&mut active, &values);
    if assigned == 0 {
        debug!("No changes for {} {}", what, id);
        return Ok(current);
    }

    debug!("Updating {} field(s) of {} {}", assigned, what, id);
    active
        .update(txn)
        .await
        .map_err(|e| PortalError::database_operation(format!("更新{what}失败: {e}")))
}

/// 将 `values` 中已设置且与当前值不同的字段写入 `target`，返回写入的字段数
pub(crate) fn apply_changes<A: ActiveModelTrait>(target: &mut A, values: &A) -> usize {
    let mut assigned = 0;
    for column in <A::Entity as EntityTrait>::Column::iter() {
        if let ActiveValue::Set(new_value) = values.get(column)
            && target.get(column).into_value().as_ref() != Some(&new_value)
        {
            target.set(column, new_value);
            assigned += 1;
        }
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::semesters::{ActiveModel, Model};
    use chrono::NaiveDate;
    use sea_orm::Set;

    fn stored() -> Model {
        Model {
            id: 1,
            year: 2024,
            season: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        }
    }

    fn submitted(year: i32) -> ActiveModel {
        ActiveModel {
            year: Set(year),
            season: Set(1),
            start_date: Set(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            end_date: Set(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_unchanged_values_assign_nothing() {
        let mut active = stored().into_active_model();
        assert_eq!(apply_changes(&mut active, &submitted(2024)), 0);
        assert!(!active.is_changed());
    }

    #[test]
    fn test_only_changed_fields_are_assigned() {
        let mut active = stored().into_active_model();
        assert_eq!(apply_changes(&mut active, &submitted(2025)), 1);
        assert!(active.is_changed());
        assert_eq!(active.year, Set(2025));
        // 主键未提交，保持原值
        assert_eq!(active.id.clone().unwrap(), 1);
    }
}
