//! Document entity - Customs and shipping paperwork for one delivery order.
//!
//! The document type is free text ("Import", "Commercial Invoice", ...). `shipping_fee`
//! is the sum of the estimated prices of the document's detail lines, computed when
//! the lines are written.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Document database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Public identifier, generated on creation
    #[sea_orm(unique)]
    pub document_id: Uuid,
    /// Human facing number, `DOC` followed by digits
    pub document_number: String,
    /// Free-text document type
    pub document_type: String,
    /// Date the document was issued
    pub issue_date: Date,
    /// Date the document stops being valid, if it expires
    pub expiration_date: Option<Date>,
    /// Consignee contact name
    pub consignee_name: Option<String>,
    /// Consignee contact phone
    pub consignee_phone: Option<String>,
    /// Consignee address
    pub consignee_address: Option<String>,
    /// Exporter contact name
    pub exporter_name: Option<String>,
    /// Exporter contact phone
    pub exporter_phone: Option<String>,
    /// Exporter address
    pub exporter_address: Option<String>,
    /// How the goods are dispatched (e.g. "air", "sea")
    pub dispatch_method: Option<String>,
    /// Vehicle type (e.g. "airplane", "truck")
    pub transportation_type: Option<String>,
    /// Sum of the detail lines' estimated prices
    pub shipping_fee: Option<f64>,
    /// Delivery order the paperwork belongs to
    pub delivery_order_id: i32,
}

/// Defines relationships between Document and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each document belongs to one delivery order
    #[sea_orm(
        belongs_to = "super::delivery_order::Entity",
        from = "Column::DeliveryOrderId",
        to = "super::delivery_order::Column::Id"
    )]
    DeliveryOrder,
    /// One document has many line items
    #[sea_orm(has_many = "super::document_detail::Entity")]
    DocumentDetails,
}

impl Related<super::delivery_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryOrder.def()
    }
}

impl Related<super::document_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
