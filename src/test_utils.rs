//! Shared test utilities for the delivery core.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test rows with sensible defaults.

use crate::{
    entities::{delivery_order, payment, sender_information, shipping_fee, user},
    errors::Result,
    migration::Migrator,
    models::{DocumentDetailInput, DocumentHeader, DocumentMutation},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with every migration applied.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Creates a delivery order together with the user, sender profile, payment method and
/// shipping fee tier it references.
///
/// # Defaults
/// * payment: "Cash"
/// * shipping fee: STD tier, 0-5 km, 22000
/// * order status: "Pending"
pub async fn create_test_delivery_order(
    db: &DatabaseConnection,
) -> Result<delivery_order::Model> {
    let owner = user::ActiveModel {
        user_id: Set(Uuid::new_v4()),
        full_name: Set("Test User".to_string()),
        email: Set("test@example.com".to_string()),
        phone: Set("0123456789".to_string()),
        password_hash: Set("not-a-real-hash".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let sender = sender_information::ActiveModel {
        sender_name: Set("Test Sender".to_string()),
        sender_phone: Set("0123456789".to_string()),
        street: Set("1 Test Street".to_string()),
        ward: Set("Ward 1".to_string()),
        district: Set("District 1".to_string()),
        city_province: Set("Ho Chi Minh".to_string()),
        latitude: Set(10.7769),
        longitude: Set(106.7009),
        user_id: Set(owner.id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let cash = payment::ActiveModel {
        payment_method: Set("Cash".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let tier = shipping_fee::ActiveModel {
        distance_range_from: Set(0.0),
        distance_range_to: Set(5.0),
        service_code: Set("STD".to_string()),
        weight_class: Set(3),
        base_fee: Set(22000.0),
        estimated_time: Set("1-2 days".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    delivery_order::ActiveModel {
        recipient_name: Set("Test Recipient".to_string()),
        recipient_address: Set("2 Test Street".to_string()),
        recipient_longitude: Set(106.7),
        recipient_latitude: Set(10.8),
        recipient_phone: Set("0987654321".to_string()),
        create_date: Set(Utc::now().naive_utc()),
        order_status: Set("Pending".to_string()),
        total_amount: Set(100_000.0),
        is_purchased: Set(false),
        is_sender_purchase: Set(true),
        is_international: Set(false),
        shipping_fee_id: Set(tier.id),
        payment_id: Set(cash.id),
        sender_information_id: Set(sender.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// A filled-in import document header for the given order.
pub fn sample_header(delivery_order_id: i32) -> DocumentHeader {
    DocumentHeader {
        document_type: "Import".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 9, 20).unwrap_or_default(),
        expiration_date: NaiveDate::from_ymd_opt(2024, 12, 20),
        consignee_name: Some("John Doe".to_string()),
        consignee_phone: Some("0123456789".to_string()),
        consignee_address: Some("123 Main St".to_string()),
        exporter_name: Some("Koi Exporter Ltd".to_string()),
        exporter_phone: Some("0987654321".to_string()),
        exporter_address: Some("456 Export Ave".to_string()),
        dispatch_method: Some("air".to_string()),
        transportation_type: Some("airplane".to_string()),
        delivery_order_id,
    }
}

/// A create/update request with [`sample_header`] and the given lines.
pub fn sample_mutation(
    delivery_order_id: i32,
    document_details: Vec<DocumentDetailInput>,
) -> DocumentMutation {
    DocumentMutation {
        header: sample_header(delivery_order_id),
        document_details,
    }
}
