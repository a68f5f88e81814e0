//! SeaORM Entity for the transcripts table.
//! A transcript is the raw meeting text submitted by a user.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::transcripts::Model)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "action_tracker", table_name = "transcripts")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    #[schema(value_type = String, format = "uuid")]
    pub id: Id,

    /// Raw meeting transcript text, stored exactly as submitted
    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::action_items::Entity")]
    ActionItems,
}

impl Related<super::action_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActionItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
