//! SeaORM Entity for the action_items table.
//! Stores action items extracted from a transcript or added by hand.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::action_items::Model)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "action_tracker", table_name = "action_items")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    #[schema(value_type = String, format = "uuid")]
    pub id: Id,

    /// Owning transcript; an item never moves between transcripts
    #[schema(value_type = String, format = "uuid")]
    pub transcript_id: Id,

    /// What needs to be done
    #[sea_orm(column_type = "Text")]
    pub task: String,

    /// Who is responsible, when mentioned in the transcript
    pub owner: Option<String>,

    #[schema(value_type = Option<String>, format = DateTime)]
    pub due_date: Option<DateTimeWithTimeZone>,

    /// Comma-joined category labels. A tag containing the delimiter is
    /// misparsed on read; callers must not put commas in tag values.
    #[sea_orm(column_type = "Text", nullable)]
    pub tags: Option<String>,

    pub is_completed: bool,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transcripts::Entity",
        from = "Column::TranscriptId",
        to = "super::transcripts::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Transcripts,
}

impl Related<super::transcripts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transcripts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
