//! Shipping fee entity - Pricing tiers keyed by distance range, service code and weight class.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shipping fee tier database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipping_fees")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Lower bound of the distance range in kilometres
    pub distance_range_from: f64,
    /// Upper bound of the distance range in kilometres
    pub distance_range_to: f64,
    /// Service code: `"STD"`, `"EXP"` or `"PRM"`
    pub service_code: String,
    /// Weight class the tier applies to
    pub weight_class: i32,
    /// Base fee charged for the tier
    pub base_fee: f64,
    /// Delivery estimate label (e.g. "1-2 days")
    pub estimated_time: String,
}

/// Defines relationships between `ShippingFee` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One tier prices many delivery orders
    #[sea_orm(has_many = "super::delivery_order::Entity")]
    DeliveryOrders,
}

impl Related<super::delivery_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
