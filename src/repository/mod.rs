//! Data-access seams.
//!
//! The initializer and the document service only see these traits. [`DatabaseRepository`]
//! is the `SeaORM` adapter used in production and in the integration tests.

use crate::{
    entities::{document, document_detail},
    errors::Result,
    models::{DocumentHeader, NewDocument},
};
use async_trait::async_trait;
use sea_orm::DbErr;
use uuid::Uuid;

pub mod database;

pub use database::DatabaseRepository;

/// Schema probing and migration, as needed by the startup initializer.
#[async_trait]
pub trait SchemaRepository: Send + Sync {
    /// Whether the application database exists and answers.
    async fn can_connect(&self) -> std::result::Result<bool, DbErr>;

    /// Names of the migrations already recorded as applied.
    async fn applied_migrations(&self) -> std::result::Result<Vec<String>, DbErr>;

    /// Applies every pending migration.
    async fn apply_pending_migrations(&self) -> std::result::Result<(), DbErr>;
}

/// Document persistence.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Every document row, in primary key order.
    async fn find_all(&self) -> Result<Vec<document::Model>>;

    /// The document with the given public identifier, if any.
    async fn find_by_document_id(&self, document_id: Uuid) -> Result<Option<document::Model>>;

    /// Line items of a document, in insertion order.
    async fn find_details(&self, document: &document::Model)
    -> Result<Vec<document_detail::Model>>;

    /// Stores a document and all of its lines as one unit of work.
    async fn insert_with_details(&self, document: NewDocument) -> Result<document::Model>;

    /// Overwrites the header fields of an existing document.
    async fn update_header(
        &self,
        existing: document::Model,
        header: DocumentHeader,
    ) -> Result<document::Model>;
}
