//! Value types passed between the document service and the repository.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Header fields of a customs document, everything except identifiers, fee and lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    /// Free-text document type ("Import", "Commercial Invoice", ...)
    pub document_type: String,
    /// Date the document was issued
    pub issue_date: NaiveDate,
    /// Date the document stops being valid
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    /// Consignee contact name
    #[serde(default)]
    pub consignee_name: Option<String>,
    /// Consignee contact phone
    #[serde(default)]
    pub consignee_phone: Option<String>,
    /// Consignee address
    #[serde(default)]
    pub consignee_address: Option<String>,
    /// Exporter contact name
    #[serde(default)]
    pub exporter_name: Option<String>,
    /// Exporter contact phone
    #[serde(default)]
    pub exporter_phone: Option<String>,
    /// Exporter address
    #[serde(default)]
    pub exporter_address: Option<String>,
    /// How the goods are dispatched
    #[serde(default)]
    pub dispatch_method: Option<String>,
    /// Vehicle type
    #[serde(default)]
    pub transportation_type: Option<String>,
    /// Delivery order the document belongs to
    pub delivery_order_id: i32,
}

/// A line item as submitted by a caller. The estimated price is always computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetailInput {
    /// Item name
    pub item_name: String,
    /// Item category
    pub item_category: String,
    /// Weight of one unit in kilograms
    pub item_weight: f64,
    /// Number of units
    pub item_quantity: i32,
}

/// Input for creating or updating a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMutation {
    /// Header fields
    #[serde(flatten)]
    pub header: DocumentHeader,
    /// Line items
    #[serde(default)]
    pub document_details: Vec<DocumentDetailInput>,
}

/// A line item with its computed estimated price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    /// Item name
    pub item_name: String,
    /// Item category
    pub item_category: String,
    /// Weight of one unit in kilograms
    pub item_weight: f64,
    /// Number of units
    pub item_quantity: i32,
    /// `item_quantity × item_weight × price_per_kilogram`
    pub item_estimate_price: f64,
}

/// A fully priced document ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    /// Public identifier
    pub document_id: Uuid,
    /// `DOC` + digits
    pub document_number: String,
    /// Header fields
    pub header: DocumentHeader,
    /// Sum of the line prices
    pub shipping_fee: f64,
    /// Priced line items
    pub lines: Vec<PricedLine>,
}
