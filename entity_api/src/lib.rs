use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub use entity::{action_items, transcripts, Id};

pub mod action_item;
pub mod error;
pub mod mutate;
pub mod transcript;

/// Inserts a sample transcript with a couple of action items so the dashboard
/// has something to render during local development.
pub async fn seed_database(db: &DatabaseConnection) {
    let now = Utc::now();

    let transcript = transcripts::ActiveModel {
        content: Set(
            "Alice: I'll send the quarterly report by Friday. \
             Bob: I can draft the launch checklist next week."
                .to_owned(),
        ),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    action_items::ActiveModel {
        transcript_id: Set(transcript.id.clone().unwrap()),
        task: Set("Send the quarterly report".to_owned()),
        owner: Set(Some("Alice".to_owned())),
        due_date: Set(None),
        tags: Set(Some("Reporting".to_owned())),
        is_completed: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    action_items::ActiveModel {
        transcript_id: Set(transcript.id.unwrap()),
        task: Set("Draft the launch checklist".to_owned()),
        owner: Set(Some("Bob".to_owned())),
        due_date: Set(None),
        tags: Set(Some("Planning".to_owned())),
        is_completed: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();
}
