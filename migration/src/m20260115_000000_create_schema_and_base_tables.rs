use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the application's schema
        manager
            .get_connection()
            .execute_unprepared("CREATE SCHEMA IF NOT EXISTS action_tracker;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("SET search_path TO action_tracker, public;")
            .await?;

        // Create transcripts table
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE IF NOT EXISTS action_tracker.transcripts (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    content TEXT NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                )
            "#,
            )
            .await?;

        // Create action_items table
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE IF NOT EXISTS action_tracker.action_items (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    transcript_id UUID NOT NULL
                        REFERENCES action_tracker.transcripts(id) ON DELETE CASCADE,
                    task TEXT NOT NULL,
                    owner VARCHAR(255),
                    due_date TIMESTAMPTZ,
                    tags TEXT,
                    is_completed BOOLEAN NOT NULL DEFAULT FALSE,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                )
            "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_action_items_transcript_id
                    ON action_tracker.action_items(transcript_id)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS action_tracker.action_items;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS action_tracker.transcripts;")
            .await?;

        // Drop the schema (CASCADE will remove anything left in it)
        manager
            .get_connection()
            .execute_unprepared("DROP SCHEMA IF EXISTS action_tracker CASCADE;")
            .await?;

        Ok(())
    }
}
