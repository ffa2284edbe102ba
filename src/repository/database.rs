//! `SeaORM` implementation of the repository traits.

use crate::{
    entities::{Document, DocumentDetail, document, document_detail},
    errors::Result,
    migration::Migrator,
    models::{DocumentHeader, NewDocument},
    repository::{DocumentRepository, SchemaRepository},
};
use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, QueryOrder, Set, TransactionTrait, prelude::*};
use sea_orm_migration::{MigratorTrait, SchemaManager};
use tracing::{debug, error, instrument};

/// History table maintained by `sea-orm-migration`.
const MIGRATION_TABLE: &str = "seaql_migrations";

/// Repository backed by a `SeaORM` connection.
#[derive(Debug, Clone)]
pub struct DatabaseRepository {
    db: DatabaseConnection,
}

impl DatabaseRepository {
    /// Wraps an open connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn apply_header(active: &mut document::ActiveModel, header: DocumentHeader) {
    active.document_type = Set(header.document_type);
    active.issue_date = Set(header.issue_date);
    active.expiration_date = Set(header.expiration_date);
    active.consignee_name = Set(header.consignee_name);
    active.consignee_phone = Set(header.consignee_phone);
    active.consignee_address = Set(header.consignee_address);
    active.exporter_name = Set(header.exporter_name);
    active.exporter_phone = Set(header.exporter_phone);
    active.exporter_address = Set(header.exporter_address);
    active.dispatch_method = Set(header.dispatch_method);
    active.transportation_type = Set(header.transportation_type);
    active.delivery_order_id = Set(header.delivery_order_id);
}

async fn insert_document(
    txn: &DatabaseTransaction,
    document: NewDocument,
) -> std::result::Result<document::Model, DbErr> {
    let mut active = document::ActiveModel {
        document_id: Set(document.document_id),
        document_number: Set(document.document_number),
        shipping_fee: Set(Some(document.shipping_fee)),
        ..Default::default()
    };
    apply_header(&mut active, document.header);
    let stored = active.insert(txn).await?;

    for line in document.lines {
        document_detail::ActiveModel {
            item_name: Set(line.item_name),
            item_category: Set(line.item_category),
            item_weight: Set(line.item_weight),
            item_quantity: Set(line.item_quantity),
            item_estimate_price: Set(line.item_estimate_price),
            document_id: Set(stored.id),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }
    Ok(stored)
}

#[async_trait]
impl SchemaRepository for DatabaseRepository {
    /// A database that answers but has no migration history has not been created yet,
    /// so it is reported as not reachable.
    async fn can_connect(&self) -> std::result::Result<bool, DbErr> {
        if let Err(e) = self.db.ping().await {
            debug!("Database ping failed: {e}");
            return Ok(false);
        }
        SchemaManager::new(&self.db).has_table(MIGRATION_TABLE).await
    }

    /// `get_applied_migrations` installs the history table, so check for it first.
    async fn applied_migrations(&self) -> std::result::Result<Vec<String>, DbErr> {
        if !SchemaManager::new(&self.db).has_table(MIGRATION_TABLE).await? {
            return Ok(Vec::new());
        }
        Ok(Migrator::get_applied_migrations(&self.db)
            .await?
            .iter()
            .map(|migration| migration.name().to_string())
            .collect())
    }

    async fn apply_pending_migrations(&self) -> std::result::Result<(), DbErr> {
        Migrator::up(&self.db, None).await
    }
}

#[async_trait]
impl DocumentRepository for DatabaseRepository {
    async fn find_all(&self) -> Result<Vec<document::Model>> {
        Document::find()
            .order_by_asc(document::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_document_id(&self, document_id: Uuid) -> Result<Option<document::Model>> {
        Document::find()
            .filter(document::Column::DocumentId.eq(document_id))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_details(
        &self,
        document: &document::Model,
    ) -> Result<Vec<document_detail::Model>> {
        DocumentDetail::find()
            .filter(document_detail::Column::DocumentId.eq(document.id))
            .order_by_asc(document_detail::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self, document), fields(document_number = %document.document_number))]
    async fn insert_with_details(&self, document: NewDocument) -> Result<document::Model> {
        let txn = self.db.begin().await?;

        match insert_document(&txn, document).await {
            Ok(stored) => {
                txn.commit().await?;
                debug!("Stored document {} with id {}", stored.document_id, stored.id);
                Ok(stored)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!("Failed to roll back document insert: {rollback_err}");
                }
                Err(e.into())
            }
        }
    }

    async fn update_header(
        &self,
        existing: document::Model,
        header: DocumentHeader,
    ) -> Result<document::Model> {
        let mut active: document::ActiveModel = existing.into();
        apply_header(&mut active, header);
        active.update(&self.db).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_delivery_order, sample_header, setup_test_db};
    use crate::{errors::Error, models::PricedLine};
    use sea_orm::Database;

    #[tokio::test]
    async fn test_fresh_database_is_not_reachable_until_migrated() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        let repository = DatabaseRepository::new(db);

        assert!(!repository.can_connect().await?);
        assert!(repository.applied_migrations().await?.is_empty());
        assert!(!repository.can_connect().await?);

        repository.apply_pending_migrations().await?;
        assert!(repository.can_connect().await?);
        assert_eq!(repository.applied_migrations().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_with_details_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let order = create_test_delivery_order(&db).await?;
        let repository = DatabaseRepository::new(db);

        let new_document = NewDocument {
            document_id: Uuid::new_v4(),
            document_number: "DOC123456789".to_string(),
            header: sample_header(order.id),
            shipping_fee: 19600.0,
            lines: vec![PricedLine {
                item_name: "Black Koi".to_string(),
                item_category: "Fish".to_string(),
                item_weight: 1.4,
                item_quantity: 2,
                item_estimate_price: 19600.0,
            }],
        };
        let stored = repository.insert_with_details(new_document.clone()).await?;

        let found = repository
            .find_by_document_id(new_document.document_id)
            .await?
            .unwrap();
        assert_eq!(found, stored);
        assert_eq!(found.shipping_fee, Some(19600.0));

        let details = repository.find_details(&found).await?;
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].item_name, "Black Koi");
        assert_eq!(details[0].document_id, found.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_rolls_back_when_order_is_missing() -> Result<()> {
        let db = setup_test_db().await?;
        let repository = DatabaseRepository::new(db);

        let new_document = NewDocument {
            document_id: Uuid::new_v4(),
            document_number: "DOC987654321".to_string(),
            header: sample_header(4242),
            shipping_fee: 0.0,
            lines: Vec::new(),
        };
        let result = repository.insert_with_details(new_document).await;
        assert!(matches!(result, Err(Error::Database(_))), "got {result:?}");
        assert!(repository.find_all().await?.is_empty());
        Ok(())
    }
}
