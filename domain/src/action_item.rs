//! Operations on individual action items.

use crate::error::Error;
use crate::{action_items, Id, IntoUpdateMap, NewActionItem, UpdateMap};
use entity_api::{action_item, mutate};
use log::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DatabaseConnection, IntoActiveModel, Value};

pub use entity_api::action_item::find_by_id;

/// Creates an action item by hand under the given transcript. The transcript
/// id is taken on trust; an unknown id fails at the persistence layer.
pub async fn create(
    db: &DatabaseConnection,
    transcript_id: Id,
    item: NewActionItem,
) -> Result<action_items::Model, Error> {
    Ok(action_item::create(db, transcript_id, item).await?)
}

/// Partial update for an action item. The outer `Option` is presence in the
/// request; the inner `Option` on nullable columns is the new value, with
/// `None` clearing the column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateActionItem {
    pub task: Option<String>,
    pub owner: Option<Option<String>>,
    pub due_date: Option<Option<DateTimeWithTimeZone>>,
    pub is_completed: Option<bool>,
}

impl IntoUpdateMap for UpdateActionItem {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        if let Some(task) = self.task {
            update_map.insert(
                "task".to_string(),
                Some(Value::String(Some(Box::new(task)))),
            );
        }
        if let Some(owner) = self.owner {
            update_map.insert("owner".to_string(), Some(Value::String(owner.map(Box::new))));
        }
        if let Some(due_date) = self.due_date {
            update_map.insert(
                "due_date".to_string(),
                Some(Value::ChronoDateTimeWithTimeZone(due_date.map(Box::new))),
            );
        }
        if let Some(is_completed) = self.is_completed {
            update_map.insert(
                "is_completed".to_string(),
                Some(Value::Bool(Some(is_completed))),
            );
        }
        update_map.insert(
            "updated_at".to_string(),
            Some(Value::ChronoDateTimeWithTimeZone(Some(Box::new(
                chrono::Utc::now().into(),
            )))),
        );
        update_map
    }
}

/// Applies a partial update to an existing action item. Only fields present
/// in `params` are touched; everything else keeps its stored value, so
/// re-applying the same update is idempotent.
pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap + std::fmt::Debug,
) -> Result<action_items::Model, Error> {
    debug!("Updating ActionItem {id} with: {params:?}");

    let existing = action_item::find_by_id(db, id).await?;
    let active_model = existing.into_active_model();
    Ok(
        mutate::update::<action_items::ActiveModel, action_items::Column>(
            db,
            active_model,
            params.into_update_map(),
        )
        .await?,
    )
}

/// Deletes an action item by id.
pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    debug!("Deleting ActionItem {id}");
    Ok(action_item::delete_by_id(db, id).await?)
}


#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod mock_tests {
    use super::*;
    use crate::error::{DomainErrorKind, EntityErrorKind, InternalErrorKind};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn item_model() -> action_items::Model {
        let now = chrono::Utc::now();
        action_items::Model {
            id: Id::new_v4(),
            transcript_id: Id::new_v4(),
            task: "Send report".to_owned(),
            owner: Some("Alice".to_owned()),
            due_date: None,
            tags: None,
            is_completed: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn update_returns_the_updated_item() -> Result<(), Error> {
        let existing = item_model();
        let mut updated = existing.clone();
        updated.is_completed = true;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing.clone()], vec![updated.clone()]])
            .into_connection();

        let item = update(
            &db,
            existing.id,
            UpdateActionItem {
                is_completed: Some(true),
                ..Default::default()
            },
        )
        .await?;

        assert!(item.is_completed);
        assert_eq!(item.task, existing.task);

        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_id_reports_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<action_items::Model>::new()])
            .into_connection();

        let result = update(&db, Id::new_v4(), UpdateActionItem::default()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
        );
    }
}
