//! Startup initializer - Brings the schema up to date and seeds empty tables.

use crate::{
    config::seed::SeedData,
    core::{
        pricing::Pricing,
        seed::{SeedReport, seed_all},
    },
    errors::{Error, Result},
    repository::{DatabaseRepository, SchemaRepository},
};
use chrono::Utc;
use sea_orm::TransactionTrait;
use tracing::{error, info, warn};

/// What [`initialize`] found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The store was unreachable but already had migration history; nothing was applied
    AlreadyMigrated,
    /// Pending migrations were applied
    Migrated,
    /// The store was reachable; nothing was done
    Unchanged,
}

/// Applies pending migrations when the store cannot be reached and has no migration
/// history; otherwise does nothing.
///
/// # Errors
/// Any failure while probing or migrating is returned as `Error::Initialization`.
pub async fn initialize<S: SchemaRepository + ?Sized>(store: &S) -> Result<InitOutcome> {
    let reachable = store
        .can_connect()
        .await
        .map_err(|source| Error::Initialization { source })?;
    if reachable {
        return Ok(InitOutcome::Unchanged);
    }

    let applied = store
        .applied_migrations()
        .await
        .map_err(|source| Error::Initialization { source })?;
    if !applied.is_empty() {
        warn!(
            "Database not reachable but {} migrations are already recorded, leaving schema alone",
            applied.len()
        );
        return Ok(InitOutcome::AlreadyMigrated);
    }

    store
        .apply_pending_migrations()
        .await
        .map_err(|source| Error::Initialization { source })?;
    info!("Applied pending migrations");
    Ok(InitOutcome::Migrated)
}

/// Schema setup and first-run seeding over a database connection.
#[derive(Debug, Clone)]
pub struct DatabaseInitializer {
    repository: DatabaseRepository,
    seed_data: SeedData,
    pricing: Pricing,
}

impl DatabaseInitializer {
    /// Creates an initializer that seeds `seed_data`, pricing document lines with `pricing`.
    #[must_use]
    pub const fn new(repository: DatabaseRepository, seed_data: SeedData, pricing: Pricing) -> Self {
        Self {
            repository,
            seed_data,
            pricing,
        }
    }

    /// See [`initialize`].
    pub async fn initialize(&self) -> Result<InitOutcome> {
        initialize(&self.repository).await
    }

    /// Seeds every empty table inside one transaction.
    ///
    /// Either every step that ran is committed or, on the first failure, the transaction
    /// is rolled back and nothing is written.
    pub async fn seed(&self) -> Result<SeedReport> {
        let txn = self.repository.connection().begin().await?;
        let now = Utc::now().naive_utc();

        match seed_all(&txn, &self.seed_data, &self.pricing, now).await {
            Ok(report) => {
                txn.commit().await?;
                info!(
                    "Seeding committed: {} steps ran, {} skipped, {} rows",
                    report.seeded.len(),
                    report.skipped.len(),
                    report.rows_inserted()
                );
                Ok(report)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!("Failed to roll back seed transaction: {rollback_err}");
                }
                Err(e)
            }
        }
    }

    /// Seeds like [`Self::seed`], logging a failure before returning it.
    pub async fn try_seed(&self) -> Result<SeedReport> {
        self.seed()
            .await
            .inspect_err(|e| error!("An error occurred while seeding the database: {e}"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{
        config::seed::bundled_seed_data,
        core::{credentials::verify_password, seed::SEED_ORDER},
        entities::{
            Animal, AnimalType, CareTask, DeliveryOrder, DeliveryOrderDetail, Document,
            DocumentDetail, Payment, SenderInformation, ShippingFee, Staff, User,
            VoucherPromotion, document_detail,
        },
        test_utils::{init_test_tracing, setup_test_db},
    };
    use async_trait::async_trait;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, DbErr, EntityTrait,
        PaginatorTrait, QueryFilter, Set,
    };
    use std::sync::Mutex;

    /// Scripted schema store that records whether migrations were applied.
    struct FakeStore {
        reachable: bool,
        connect_error: Option<String>,
        applied: Vec<String>,
        migrate_error: Option<String>,
        migrated: Mutex<bool>,
    }

    impl FakeStore {
        fn new(reachable: bool, applied: &[&str]) -> Self {
            Self {
                reachable,
                connect_error: None,
                applied: applied.iter().map(ToString::to_string).collect(),
                migrate_error: None,
                migrated: Mutex::new(false),
            }
        }

        fn migrated(&self) -> bool {
            *self.migrated.lock().unwrap()
        }
    }

    #[async_trait]
    impl SchemaRepository for FakeStore {
        async fn can_connect(&self) -> std::result::Result<bool, DbErr> {
            match &self.connect_error {
                Some(message) => Err(DbErr::Custom(message.clone())),
                None => Ok(self.reachable),
            }
        }

        async fn applied_migrations(&self) -> std::result::Result<Vec<String>, DbErr> {
            Ok(self.applied.clone())
        }

        async fn apply_pending_migrations(&self) -> std::result::Result<(), DbErr> {
            if let Some(message) = &self.migrate_error {
                return Err(DbErr::Migration(message.clone()));
            }
            *self.migrated.lock().unwrap() = true;
            Ok(())
        }
    }

    async fn table_counts(db: &DatabaseConnection) -> Vec<u64> {
        vec![
            User::find().count(db).await.unwrap(),
            SenderInformation::find().count(db).await.unwrap(),
            VoucherPromotion::find().count(db).await.unwrap(),
            Payment::find().count(db).await.unwrap(),
            ShippingFee::find().count(db).await.unwrap(),
            DeliveryOrder::find().count(db).await.unwrap(),
            AnimalType::find().count(db).await.unwrap(),
            Animal::find().count(db).await.unwrap(),
            DeliveryOrderDetail::find().count(db).await.unwrap(),
            CareTask::find().count(db).await.unwrap(),
            Staff::find().count(db).await.unwrap(),
            Document::find().count(db).await.unwrap(),
            DocumentDetail::find().count(db).await.unwrap(),
        ]
    }

    async fn seeded_initializer() -> Result<DatabaseInitializer> {
        init_test_tracing();
        let db = setup_test_db().await?;
        Ok(DatabaseInitializer::new(
            DatabaseRepository::new(db),
            bundled_seed_data()?,
            Pricing::new(7000.0),
        ))
    }

    #[tokio::test]
    async fn test_reachable_store_is_unchanged() -> Result<()> {
        let store = FakeStore::new(true, &[]);
        assert_eq!(initialize(&store).await?, InitOutcome::Unchanged);
        assert!(!store.migrated());
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_store_with_history_is_left_alone() -> Result<()> {
        let store = FakeStore::new(false, &["m20241001_000001_create_delivery_tables"]);
        assert_eq!(initialize(&store).await?, InitOutcome::AlreadyMigrated);
        assert!(!store.migrated());
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_store_without_history_is_migrated() -> Result<()> {
        let store = FakeStore::new(false, &[]);
        assert_eq!(initialize(&store).await?, InitOutcome::Migrated);
        assert!(store.migrated());
        Ok(())
    }

    #[tokio::test]
    async fn test_connect_and_migration_failures_are_initialization_errors() {
        let mut broken_connect = FakeStore::new(false, &[]);
        broken_connect.connect_error = Some("disk gone".to_string());
        assert!(matches!(
            initialize(&broken_connect).await,
            Err(Error::Initialization { .. })
        ));

        let mut broken_migration = FakeStore::new(false, &[]);
        broken_migration.migrate_error = Some("syntax error".to_string());
        assert!(matches!(
            initialize(&broken_migration).await,
            Err(Error::Initialization { .. })
        ));
    }

    #[tokio::test]
    async fn test_fresh_database_is_migrated_once() -> Result<()> {
        init_test_tracing();
        let db = Database::connect("sqlite::memory:").await?;
        let initializer = DatabaseInitializer::new(
            DatabaseRepository::new(db),
            SeedData::default(),
            Pricing::default(),
        );

        assert_eq!(initializer.initialize().await?, InitOutcome::Migrated);
        assert_eq!(initializer.initialize().await?, InitOutcome::Unchanged);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_fills_every_table() -> Result<()> {
        let initializer = seeded_initializer().await?;

        let report = initializer.seed().await?;
        assert_eq!(report.seeded.len(), SEED_ORDER.len());
        assert!(report.skipped.is_empty());

        let counts = table_counts(initializer.repository.connection()).await;
        assert_eq!(counts, vec![1, 2, 3, 5, 5, 10, 4, 3, 20, 3, 10, 10, 20]);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_twice_changes_nothing() -> Result<()> {
        let initializer = seeded_initializer().await?;

        initializer.seed().await?;
        let before = table_counts(initializer.repository.connection()).await;

        let second = initializer.try_seed().await?;
        assert!(second.is_noop());
        assert_eq!(second.skipped.len(), SEED_ORDER.len());
        assert_eq!(table_counts(initializer.repository.connection()).await, before);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_skips_populated_tables() -> Result<()> {
        let initializer = seeded_initializer().await?;
        let db = initializer.repository.connection();

        for label in ["Bank Transfer", "Cash", "Visa", "Debit", "Momo", "VNPay"] {
            crate::entities::payment::ActiveModel {
                payment_method: Set(label.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        let report = initializer.seed().await?;
        assert_eq!(report.skipped, vec![crate::core::seed::SeedStep::Payments]);
        assert_eq!(Payment::find().count(db).await?, 6);
        assert_eq!(DeliveryOrder::find().count(db).await?, 10);
        Ok(())
    }

    #[tokio::test]
    async fn test_dangling_reference_rolls_back_everything() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let mut seed_data = bundled_seed_data()?;
        seed_data.delivery_orders[0].shipping_fee = 99;
        let initializer =
            DatabaseInitializer::new(DatabaseRepository::new(db), seed_data, Pricing::default());

        let result = initializer.try_seed().await;
        assert!(matches!(
            result,
            Err(Error::SeedReference {
                step: "delivery_orders",
                ..
            })
        ));

        let counts = table_counts(initializer.repository.connection()).await;
        assert!(counts.iter().all(|count| *count == 0), "rows left behind: {counts:?}");
        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_fixture_date_is_seed_error() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let mut seed_data = bundled_seed_data()?;
        seed_data.delivery_orders[0].created_days_ago = i64::MAX / 1000;
        let initializer =
            DatabaseInitializer::new(DatabaseRepository::new(db), seed_data, Pricing::default());

        let result = initializer.try_seed().await;
        assert!(matches!(
            result,
            Err(Error::Seed {
                step: "delivery_orders",
                ..
            })
        ));

        let counts = table_counts(initializer.repository.connection()).await;
        assert!(counts.iter().all(|count| *count == 0), "rows left behind: {counts:?}");
        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_rows_reference_existing_parents() -> Result<()> {
        let initializer = seeded_initializer().await?;
        initializer.seed().await?;
        let db = initializer.repository.connection();

        for order in DeliveryOrder::find().all(db).await? {
            assert!(ShippingFee::find_by_id(order.shipping_fee_id).one(db).await?.is_some());
            assert!(Payment::find_by_id(order.payment_id).one(db).await?.is_some());
            assert!(
                SenderInformation::find_by_id(order.sender_information_id)
                    .one(db)
                    .await?
                    .is_some()
            );
        }
        for detail in DeliveryOrderDetail::find().all(db).await? {
            assert!(Animal::find_by_id(detail.animal_id).one(db).await?.is_some());
            assert!(DeliveryOrder::find_by_id(detail.delivery_order_id).one(db).await?.is_some());
        }
        for animal in Animal::find().all(db).await? {
            assert!(AnimalType::find_by_id(animal.animal_type_id).one(db).await?.is_some());
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_passwords_are_hashed() -> Result<()> {
        let initializer = seeded_initializer().await?;
        initializer.seed().await?;
        let db = initializer.repository.connection();

        let admin = User::find().one(db).await?.unwrap();
        assert_ne!(admin.password_hash, "Admin123");
        assert!(verify_password("Admin123", &admin.password_hash)?);

        let fixtures = bundled_seed_data()?;
        let first_staff = Staff::find().one(db).await?.unwrap();
        assert_ne!(first_staff.password_hash, fixtures.staff[0].password);
        assert!(verify_password(&fixtures.staff[0].password, &first_staff.password_hash)?);
        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_document_fees_match_lines() -> Result<()> {
        let initializer = seeded_initializer().await?;
        initializer.seed().await?;
        let db = initializer.repository.connection();
        let pricing = Pricing::new(7000.0);

        for stored in Document::find().all(db).await? {
            let lines = DocumentDetail::find()
                .filter(document_detail::Column::DocumentId.eq(stored.id))
                .all(db)
                .await?;
            let mut total = 0.0;
            for line in &lines {
                assert_eq!(
                    line.item_estimate_price,
                    pricing.line_estimate(line.item_quantity, line.item_weight)
                );
                total += line.item_estimate_price;
            }
            assert_eq!(stored.shipping_fee, Some(total));
        }
        Ok(())
    }
}
