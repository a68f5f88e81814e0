//! Business logic for the action tracker: transcript ingestion, action-item
//! mutation, health probes, and the outbound gateway to the generation
//! service.
//!
//! Items from `entity_api` that form part of the public surface are
//! re-exported here so that consumers (the `web` crate) depend on this crate
//! alone and never reach below the domain boundary.
pub use entity_api::{
    action_item::NewActionItem,
    action_items,
    mutate::{IntoUpdateMap, UpdateMap},
    transcript::TranscriptWithItems,
    transcripts, Id,
};

pub mod action_item;
pub mod error;
pub mod gateway;
pub mod health;
pub mod transcript;
