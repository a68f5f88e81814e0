use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use domain::action_item::UpdateActionItem;
use domain::error::{DomainErrorKind, EntityErrorKind, Error, InternalErrorKind};
use domain::transcript::parse_due_date;
use domain::NewActionItem;

/// Request body for creating a single action item by hand. Tags arrive
/// already flattened to the comma-joined column format.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = params::action_item::CreateParams)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateParams {
    pub(crate) task: Option<String>,
    pub(crate) owner: Option<String>,
    pub(crate) due_date: Option<String>,
    pub(crate) tags: Option<String>,
}

impl CreateParams {
    /// Validates the request: `task` is required and non-empty, a present due
    /// date must parse. Empty strings for the optional fields are stored as
    /// SQL NULL.
    pub(crate) fn try_into_new_item(self) -> Result<NewActionItem, Error> {
        let task = self
            .task
            .filter(|task| !task.is_empty())
            .ok_or_else(invalid_input)?;

        let due_date = match self.due_date.filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(parse_due_date(&raw).ok_or_else(invalid_input)?),
            None => None,
        };

        Ok(NewActionItem {
            task,
            owner: self.owner.filter(|owner| !owner.is_empty()),
            due_date,
            tags: self.tags.filter(|tags| !tags.is_empty()),
        })
    }
}

/// Partial update for an action item. A field absent from the JSON is left
/// untouched; `owner` and `dueDate` sent as explicit `null` clear the column.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(as = params::action_item::UpdateParams)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateParams {
    pub(crate) task: Option<String>,
    #[serde(default, deserialize_with = "present_or_absent")]
    #[schema(value_type = Option<String>)]
    pub(crate) owner: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_or_absent")]
    #[schema(value_type = Option<String>)]
    pub(crate) due_date: Option<Option<String>>,
    pub(crate) is_completed: Option<bool>,
}

/// Distinguishes a field that is present (possibly `null`) from one that was
/// never sent: serde only invokes this when the key exists in the payload.
fn present_or_absent<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl UpdateParams {
    /// Converts the wire shape into the domain update struct, parsing a
    /// present due date. An empty-string due date clears the column the same
    /// way an explicit `null` does.
    pub(crate) fn try_into_update(self) -> Result<UpdateActionItem, Error> {
        let due_date = match self.due_date {
            None => None,
            Some(None) => Some(None),
            Some(Some(raw)) if raw.is_empty() => Some(None),
            Some(Some(raw)) => Some(Some(parse_due_date(&raw).ok_or_else(invalid_input)?)),
        };

        Ok(UpdateActionItem {
            task: self.task,
            owner: self.owner,
            due_date,
            is_completed: self.is_completed,
        })
    }
}

fn invalid_input() -> Error {
    Error {
        source: None,
        error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Invalid)),
    }
}
