//! CRUD operations for the action_items table.

use super::error::{EntityApiErrorKind, Error};
use entity::action_items::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, TryIntoModel,
};

/// Field values for a new action item, already normalized by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct NewActionItem {
    pub task: String,
    pub owner: Option<String>,
    pub due_date: Option<DateTimeWithTimeZone>,
    pub tags: Option<String>,
}

/// Creates a single action item under an existing transcript.
///
/// The transcript id is not checked here; an unknown id fails the foreign key
/// constraint and surfaces as a database error.
pub async fn create(
    db: &DatabaseConnection,
    transcript_id: Id,
    item: NewActionItem,
) -> Result<Model, Error> {
    debug!("New ActionItem to be inserted under transcript: {transcript_id}");

    let now = chrono::Utc::now();

    let active_model = ActiveModel {
        transcript_id: Set(transcript_id),
        task: Set(item.task),
        owner: Set(item.owner),
        due_date: Set(item.due_date),
        tags: Set(item.tags),
        is_completed: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(active_model.save(db).await?.try_into_model()?)
}

/// Finds an action item by ID
pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

/// Finds all action items belonging to a transcript, in creation order
pub async fn find_by_transcript_id(
    db: &DatabaseConnection,
    transcript_id: Id,
) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::TranscriptId.eq(transcript_id))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}

/// Deletes an action item by ID
pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let model = find_by_id(db, id).await?;
    Entity::delete_by_id(model.id).exec(db).await?;
    Ok(())
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn item_model(task: &str) -> Model {
        let now = chrono::Utc::now();
        Model {
            id: Id::new_v4(),
            transcript_id: Id::new_v4(),
            task: task.to_owned(),
            owner: Some("Alice".to_owned()),
            due_date: None,
            tags: Some("Reporting".to_owned()),
            is_completed: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn create_returns_the_new_action_item() -> Result<(), Error> {
        let model = item_model("Send report");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let item = create(
            &db,
            model.transcript_id,
            NewActionItem {
                task: model.task.clone(),
                owner: model.owner.clone(),
                due_date: None,
                tags: model.tags.clone(),
            },
        )
        .await?;

        assert_eq!(item.id, model.id);
        assert_eq!(item.task, model.task);
        assert!(!item.is_completed);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_id_returns_error_when_item_does_not_exist() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let result = find_by_id(&db, Id::new_v4()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }

    #[tokio::test]
    async fn find_by_transcript_id_returns_all_items() -> Result<(), Error> {
        let transcript_id = Id::new_v4();
        let mut first = item_model("Send report");
        first.transcript_id = transcript_id;
        let mut second = item_model("Draft checklist");
        second.transcript_id = transcript_id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let items = find_by_transcript_id(&db, transcript_id).await?;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].task, "Send report");
        assert_eq!(items[1].task, "Draft checklist");

        Ok(())
    }

    #[tokio::test]
    async fn delete_by_id_removes_an_existing_item() -> Result<(), Error> {
        let model = item_model("Send report");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        delete_by_id(&db, model.id).await?;

        Ok(())
    }

    #[tokio::test]
    async fn delete_by_id_returns_error_when_item_does_not_exist() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let result = delete_by_id(&db, Id::new_v4()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }
}
