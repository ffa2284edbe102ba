//! Delivery order entity - A shipment request from a sender profile to a recipient.
//!
//! The order status is a free-text label ("Pending", "Out for Delivery", ...), not an enum.
//! Each order points at one shipping fee tier, one payment method and one sender profile,
//! and owns any number of documents and order detail lines.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Delivery order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "delivery_orders")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Who receives the shipment
    pub recipient_name: String,
    /// Where the shipment goes
    pub recipient_address: String,
    /// Longitude of the recipient address
    pub recipient_longitude: f64,
    /// Latitude of the recipient address
    pub recipient_latitude: f64,
    /// Requested appointment, free text (e.g. "2024-09-28 10:00 AM")
    pub recipient_appointment_time: Option<String>,
    /// Recipient contact phone
    pub recipient_phone: String,
    /// When the order was placed
    pub create_date: DateTime,
    /// When the order was (or is expected to be) delivered
    pub delivery_date: Option<DateTime>,
    /// Free-text status label
    pub order_status: String,
    /// Order total
    pub total_amount: f64,
    /// Tax charged on the order, if any
    pub tax_fee: Option<f64>,
    /// Whether the order has been paid
    pub is_purchased: bool,
    /// Whether the sender (rather than the recipient) pays
    pub is_sender_purchase: bool,
    /// Whether the shipment crosses a border
    pub is_international: bool,
    /// Pricing tier
    pub shipping_fee_id: i32,
    /// Payment method
    pub payment_id: i32,
    /// Sender profile
    pub sender_information_id: i32,
}

/// Defines relationships between `DeliveryOrder` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order is priced by one shipping fee tier
    #[sea_orm(
        belongs_to = "super::shipping_fee::Entity",
        from = "Column::ShippingFeeId",
        to = "super::shipping_fee::Column::Id"
    )]
    ShippingFee,
    /// Each order is settled with one payment method
    #[sea_orm(
        belongs_to = "super::payment::Entity",
        from = "Column::PaymentId",
        to = "super::payment::Column::Id"
    )]
    Payment,
    /// Each order ships from one sender profile
    #[sea_orm(
        belongs_to = "super::sender_information::Entity",
        from = "Column::SenderInformationId",
        to = "super::sender_information::Column::Id"
    )]
    SenderInformation,
    /// One order has many customs documents
    #[sea_orm(has_many = "super::document::Entity")]
    Documents,
    /// One order has many detail lines (animals shipped)
    #[sea_orm(has_many = "super::delivery_order_detail::Entity")]
    DeliveryOrderDetails,
}

impl Related<super::shipping_fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShippingFee.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::sender_information::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SenderInformation.def()
    }
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl Related<super::delivery_order_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryOrderDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
