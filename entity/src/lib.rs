use uuid::Uuid;

pub mod action_items;
pub mod transcripts;

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;
