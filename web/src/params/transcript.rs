use serde::Deserialize;
use utoipa::ToSchema;

use domain::error::{DomainErrorKind, EntityErrorKind, Error, InternalErrorKind};

/// Request body for transcript ingestion.
///
/// `content` is kept as raw JSON so that a missing key, an explicit `null`,
/// a non-string value and an empty string all report the same invalid-input
/// failure instead of a generic deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = params::transcript::CreateParams)]
pub(crate) struct CreateParams {
    #[serde(default)]
    #[schema(value_type = String)]
    pub(crate) content: Option<serde_json::Value>,
}

impl CreateParams {
    /// Returns the transcript text, rejecting missing, non-string and empty
    /// content.
    pub(crate) fn content(&self) -> Result<&str, Error> {
        self.content
            .as_ref()
            .and_then(|value| value.as_str())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(
                    EntityErrorKind::Invalid,
                )),
            })
    }
}
