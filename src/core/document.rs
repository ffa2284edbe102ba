//! Document business logic - Prices, numbers and stores customs documents.
//!
//! Every operation answers with a [`ServiceResult`]; store failures never escape as `Err`.
//! Each repository call runs under the service's deadline.

use crate::{
    core::{
        pricing::{Pricing, generate_document_number},
        result::{ServiceResult, Status},
    },
    entities::document,
    errors::{Error, Result},
    models::{DocumentDetailInput, DocumentMutation, NewDocument, PricedLine},
    repository::DocumentRepository,
};
use std::{future::Future, time::Duration};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Customs document operations over a [`DocumentRepository`].
#[derive(Debug, Clone)]
pub struct DocumentService<R> {
    repository: R,
    pricing: Pricing,
    timeout: Duration,
}

fn validate_line(line: &DocumentDetailInput) -> Result<()> {
    if !line.item_weight.is_finite() || line.item_weight < 0.0 {
        return Err(Error::InvalidLineItem {
            item: line.item_name.clone(),
            reason: format!("weight must be a non-negative number, got {}", line.item_weight),
        });
    }
    if line.item_quantity < 0 {
        return Err(Error::InvalidLineItem {
            item: line.item_name.clone(),
            reason: format!("quantity must not be negative, got {}", line.item_quantity),
        });
    }
    Ok(())
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Creates a service that prices lines with `pricing` and gives each store call
    /// `timeout` to finish.
    #[must_use]
    pub const fn new(repository: R, pricing: Pricing, timeout: Duration) -> Self {
        Self {
            repository,
            pricing,
            timeout,
        }
    }

    /// The repository the service writes through.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    async fn with_deadline<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| Error::Timeout {
                operation,
                seconds: self.timeout.as_secs(),
            })?
    }

    /// Returns every document row.
    pub async fn get_all(&self) -> ServiceResult<Vec<document::Model>> {
        match self
            .with_deadline("get_all_documents", self.repository.find_all())
            .await
        {
            Ok(documents) => {
                debug!("Read {} documents", documents.len());
                ServiceResult::success(Status::SuccessRead, documents)
            }
            Err(e) => {
                warn!("Failed to read documents: {e}");
                ServiceResult::from_error(e)
            }
        }
    }

    /// Prices the submitted lines, numbers the document and stores it with its lines.
    ///
    /// The stored shipping fee is the sum of the recomputed line prices; any estimated
    /// price a caller might have had in mind is ignored.
    pub async fn create_document(&self, dto: DocumentMutation) -> ServiceResult<document::Model> {
        match self.try_create(dto).await {
            Ok(stored) => {
                info!(
                    "Created document {} ({}) with shipping fee {:?}",
                    stored.document_number, stored.document_id, stored.shipping_fee
                );
                ServiceResult::success(Status::SuccessInsert, stored)
            }
            Err(e) => {
                warn!("Failed to create document: {e}");
                ServiceResult::from_error(e)
            }
        }
    }

    async fn try_create(&self, dto: DocumentMutation) -> Result<document::Model> {
        dto.document_details.iter().try_for_each(validate_line)?;

        let (prices, shipping_fee) = self.pricing.price_lines(
            dto.document_details
                .iter()
                .map(|line| (line.item_quantity, line.item_weight)),
        );
        if let Some((line, price)) = dto
            .document_details
            .iter()
            .zip(&prices)
            .find(|(_, price)| !price.is_finite())
        {
            return Err(Error::InvalidLineItem {
                item: line.item_name.clone(),
                reason: format!("estimated price is out of range, got {price}"),
            });
        }
        if !shipping_fee.is_finite() {
            return Err(Error::InvalidLineItem {
                item: "shipping fee".to_string(),
                reason: format!("sum of line prices is out of range, got {shipping_fee}"),
            });
        }
        let lines = dto
            .document_details
            .into_iter()
            .zip(prices)
            .map(|(line, item_estimate_price)| PricedLine {
                item_name: line.item_name,
                item_category: line.item_category,
                item_weight: line.item_weight,
                item_quantity: line.item_quantity,
                item_estimate_price,
            })
            .collect();

        let new_document = NewDocument {
            document_id: Uuid::new_v4(),
            document_number: generate_document_number(),
            header: dto.header,
            shipping_fee,
            lines,
        };

        self.with_deadline(
            "create_document",
            self.repository.insert_with_details(new_document),
        )
        .await
    }

    /// Overwrites the header fields of the document with public id `document_id`.
    ///
    /// Returns `FailUpdate` when no such document exists. Identifier, number, shipping
    /// fee and stored lines are kept; submitted lines are ignored.
    pub async fn update_document(
        &self,
        document_id: Uuid,
        dto: DocumentMutation,
    ) -> ServiceResult<document::Model> {
        let existing = match self
            .with_deadline(
                "find_document",
                self.repository.find_by_document_id(document_id),
            )
            .await
        {
            Ok(Some(existing)) => existing,
            Ok(None) => {
                debug!("Document {document_id} not found, nothing to update");
                return ServiceResult::failure(Status::FailUpdate);
            }
            Err(e) => {
                warn!("Failed to look up document {document_id}: {e}");
                return ServiceResult::from_error(e);
            }
        };

        if !dto.document_details.is_empty() {
            warn!(
                "Ignoring {} submitted line items on update of document {document_id}",
                dto.document_details.len()
            );
        }

        match self
            .with_deadline(
                "update_document",
                self.repository.update_header(existing, dto.header),
            )
            .await
        {
            Ok(updated) => {
                info!("Updated document {}", updated.document_number);
                ServiceResult::success(Status::SuccessUpdate, updated)
            }
            Err(e) => {
                warn!("Failed to update document {document_id}: {e}");
                ServiceResult::from_error(e)
            }
        }
    }
}
