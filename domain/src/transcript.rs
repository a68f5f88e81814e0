//! Transcript ingestion: extraction through the LLM gateway, normalization
//! of the extracted items, and transactional persistence.

use crate::error::Error;
use crate::gateway::gemini::{ExtractedItem, GeminiClient};
use crate::{NewActionItem, TranscriptWithItems};
use log::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::DatabaseConnection;
use service::config::Config;

/// Task text used when the model returns an item without one.
pub const UNTITLED_TASK: &str = "Untitled Task";

/// Ingests a transcript: extracts action items with the configured model and
/// persists the transcript together with the normalized items in a single
/// transaction. Resubmitting identical content creates a new transcript;
/// there is no idempotency key.
pub async fn create(
    db: &DatabaseConnection,
    config: &Config,
    content: String,
) -> Result<TranscriptWithItems, Error> {
    let client = GeminiClient::new(config)?;
    let extracted = client.extract_action_items(&content).await?;

    info!("Extracted {} action item(s) from transcript", extracted.len());

    let items = extracted.iter().map(normalize_extracted_item).collect();

    Ok(entity_api::transcript::create_with_items(db, content, items).await?)
}

/// Returns the `limit` most recent transcripts, newest first, with their
/// action items.
pub async fn find_latest(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<TranscriptWithItems>, Error> {
    Ok(entity_api::transcript::find_latest_with_items(db, limit).await?)
}

/// Normalizes a model-extracted item into insertable field values: missing or
/// empty tasks get a placeholder, unparseable due dates are silently dropped,
/// and tag arrays are flattened to the comma-joined column format.
pub fn normalize_extracted_item(item: &ExtractedItem) -> NewActionItem {
    NewActionItem {
        task: item
            .task
            .clone()
            .filter(|task| !task.is_empty())
            .unwrap_or_else(|| UNTITLED_TASK.to_string()),
        owner: item.owner.clone().filter(|owner| !owner.is_empty()),
        due_date: item.due_date.as_deref().and_then(parse_due_date),
        tags: flatten_tags(item.tags.as_ref()),
    }
}

/// Parses a due date as either a plain `YYYY-MM-DD` calendar date (midnight
/// UTC) or a full RFC 3339 timestamp.
pub fn parse_due_date(value: &str) -> Option<DateTimeWithTimeZone> {
    if let Ok(date) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|date_time| date_time.and_utc().fixed_offset());
    }
    chrono::DateTime::parse_from_rfc3339(value).ok()
}

/// Joins a JSON array of tags into the flattened comma-joined column format.
/// Anything other than an array becomes no tags at all.
fn flatten_tags(tags: Option<&serde_json::Value>) -> Option<String> {
    let values = tags?.as_array()?;
    Some(
        values
            .iter()
            .map(|value| match value.as_str() {
                Some(tag) => tag.to_string(),
                None => value.to_string(),
            })
            .collect::<Vec<_>>()
            .join(","),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extracted(raw: serde_json::Value) -> ExtractedItem {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn normalize_keeps_well_formed_fields() {
        let item = extracted(json!({
            "task": "Send report",
            "owner": "Alice",
            "dueDate": "2026-02-20",
            "tags": ["Reporting"]
        }));

        let normalized = normalize_extracted_item(&item);

        assert_eq!(normalized.task, "Send report");
        assert_eq!(normalized.owner.as_deref(), Some("Alice"));
        assert_eq!(normalized.tags.as_deref(), Some("Reporting"));
        let due_date = normalized.due_date.unwrap();
        assert_eq!(due_date.to_rfc3339(), "2026-02-20T00:00:00+00:00");
    }

    #[test]
    fn normalize_defaults_a_missing_task() {
        let item = extracted(json!({ "owner": "Alice" }));

        assert_eq!(normalize_extracted_item(&item).task, UNTITLED_TASK);
    }

    #[test]
    fn normalize_defaults_an_empty_task() {
        let item = extracted(json!({ "task": "" }));

        assert_eq!(normalize_extracted_item(&item).task, UNTITLED_TASK);
    }

    #[test]
    fn normalize_drops_an_unparseable_due_date() {
        let item = extracted(json!({ "task": "Follow up", "dueDate": "soon" }));

        assert_eq!(normalize_extracted_item(&item).due_date, None);
    }

    #[test]
    fn normalize_accepts_an_rfc3339_due_date() {
        let item = extracted(json!({ "task": "Follow up", "dueDate": "2026-02-20T09:30:00+01:00" }));

        assert!(normalize_extracted_item(&item).due_date.is_some());
    }

    #[test]
    fn normalize_joins_multiple_tags_with_commas() {
        let item = extracted(json!({ "task": "Plan", "tags": ["Research", "Q1"] }));

        assert_eq!(
            normalize_extracted_item(&item).tags.as_deref(),
            Some("Research,Q1")
        );
    }

    #[test]
    fn normalize_discards_tags_that_are_not_an_array() {
        let item = extracted(json!({ "task": "Plan", "tags": "Research" }));

        assert_eq!(normalize_extracted_item(&item).tags, None);
    }

    #[test]
    fn normalize_clears_an_empty_owner() {
        let item = extracted(json!({ "task": "Plan", "owner": "" }));

        assert_eq!(normalize_extracted_item(&item).owner, None);
    }
}
