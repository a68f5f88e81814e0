pub use sea_orm_migration::prelude::*;

mod m20260115_000000_create_schema_and_base_tables;
mod m20260120_000000_add_transcript_history_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000000_create_schema_and_base_tables::Migration),
            Box::new(m20260120_000000_add_transcript_history_index::Migration),
        ]
    }
}
