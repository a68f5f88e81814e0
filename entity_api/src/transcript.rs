//! CRUD operations for the transcripts table.

use super::action_item::{self, NewActionItem};
use super::error::Error;
use entity::action_items;
use entity::transcripts::{ActiveModel, Column, Entity, Model};
use log::*;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, QuerySelect,
    TransactionTrait, TryIntoModel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A transcript together with its full action-item collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TranscriptWithItems {
    #[serde(flatten)]
    pub transcript: Model,
    #[serde(rename = "actionItems")]
    pub action_items: Vec<action_items::Model>,
}

/// Creates a transcript and all of its extracted action items inside a single
/// database transaction, so a failed item insert never leaves a transcript
/// behind without its items.
pub async fn create_with_items(
    db: &DatabaseConnection,
    content: String,
    items: Vec<NewActionItem>,
) -> Result<TranscriptWithItems, Error> {
    debug!("Creating new transcript with {} action item(s)", items.len());

    let now = chrono::Utc::now();
    let txn = db.begin().await?;

    let transcript = ActiveModel {
        content: Set(content),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .save(&txn)
    .await?
    .try_into_model()?;

    let mut created_items = Vec::with_capacity(items.len());
    for item in items {
        let created = action_items::ActiveModel {
            transcript_id: Set(transcript.id),
            task: Set(item.task),
            owner: Set(item.owner),
            due_date: Set(item.due_date),
            tags: Set(item.tags),
            is_completed: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .save(&txn)
        .await?
        .try_into_model()?;
        created_items.push(created);
    }

    txn.commit().await?;

    Ok(TranscriptWithItems {
        transcript,
        action_items: created_items,
    })
}

/// Returns the most recently created transcripts, newest first, each with its
/// action items in creation order.
pub async fn find_latest_with_items(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<TranscriptWithItems>, Error> {
    let transcripts = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;

    let mut results = Vec::with_capacity(transcripts.len());
    for transcript in transcripts {
        let items = action_item::find_by_transcript_id(db, transcript.id).await?;
        results.push(TranscriptWithItems {
            transcript,
            action_items: items,
        });
    }

    Ok(results)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use entity::Id;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn transcript_model(content: &str) -> Model {
        Model {
            id: Id::new_v4(),
            content: content.to_owned(),
            created_at: chrono::Utc::now().into(),
        }
    }

    fn item_model(transcript_id: Id, task: &str) -> action_items::Model {
        let now = chrono::Utc::now();
        action_items::Model {
            id: Id::new_v4(),
            transcript_id,
            task: task.to_owned(),
            owner: None,
            due_date: None,
            tags: None,
            is_completed: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn create_with_items_returns_transcript_and_created_items() -> Result<(), Error> {
        let transcript = transcript_model("Alice will send the report by 2026-02-20");
        let item = item_model(transcript.id, "Send report");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![transcript.clone()]])
            .append_query_results(vec![vec![item.clone()]])
            .into_connection();

        let result = create_with_items(
            &db,
            transcript.content.clone(),
            vec![NewActionItem {
                task: item.task.clone(),
                owner: None,
                due_date: None,
                tags: None,
            }],
        )
        .await?;

        assert_eq!(result.transcript.id, transcript.id);
        assert_eq!(result.action_items.len(), 1);
        assert_eq!(result.action_items[0].task, "Send report");

        Ok(())
    }

    #[tokio::test]
    async fn create_with_items_accepts_an_empty_item_list() -> Result<(), Error> {
        let transcript = transcript_model("Nothing actionable was said.");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![transcript.clone()]])
            .into_connection();

        let result = create_with_items(&db, transcript.content.clone(), vec![]).await?;

        assert!(result.action_items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn find_latest_with_items_attaches_items_to_each_transcript() -> Result<(), Error> {
        let newer = transcript_model("Second standup");
        let older = transcript_model("First standup");
        let newer_item = item_model(newer.id, "Review deploy");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![newer.clone(), older.clone()]])
            .append_query_results(vec![vec![newer_item.clone()]])
            .append_query_results(vec![Vec::<action_items::Model>::new()])
            .into_connection();

        let results = find_latest_with_items(&db, 5).await?;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].transcript.id, newer.id);
        assert_eq!(results[0].action_items, vec![newer_item]);
        assert!(results[1].action_items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn transcript_with_items_serializes_items_under_camel_case_key() {
        let transcript = transcript_model("Standup");
        let with_items = TranscriptWithItems {
            transcript,
            action_items: vec![],
        };

        let value = serde_json::to_value(&with_items).unwrap();

        assert!(value.get("actionItems").is_some());
        assert!(value.get("content").is_some());
    }
}
