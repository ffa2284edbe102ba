//! Payment entity - Payment methods a delivery order can be settled with.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment method database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Method label (e.g. "Cash", "Visa", "Momo")
    pub payment_method: String,
}

/// Defines relationships between Payment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One payment method is used by many delivery orders
    #[sea_orm(has_many = "super::delivery_order::Entity")]
    DeliveryOrders,
}

impl Related<super::delivery_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
