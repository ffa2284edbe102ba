//! Schema migrations.
//!
//! Migrations are tracked by `sea-orm-migration` in its `seaql_migrations` history table.
//! The initializer only ever runs them forward.

use sea_orm_migration::prelude::*;

mod m20241001_000001_create_delivery_tables;

/// Ordered list of every schema migration
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241001_000001_create_delivery_tables::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_up_records_history_and_creates_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;

        let applied = Migrator::get_applied_migrations(&db).await?;
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].name(), "m20241001_000001_create_delivery_tables");

        let manager = SchemaManager::new(&db);
        for table in ["users", "delivery_orders", "documents", "document_details", "staff"] {
            assert!(manager.has_table(table).await?, "missing table {table}");
        }
        assert!(Migrator::get_pending_migrations(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_up_is_repeatable() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;
        Migrator::up(&db, None).await?;
        assert_eq!(Migrator::get_applied_migrations(&db).await?.len(), 1);
        Ok(())
    }
}
