//! Delivery order detail entity - One animal shipped on a delivery order, with its
//! health status before and after transport.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Delivery order detail database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "delivery_order_details")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Public identifier
    #[sea_orm(unique)]
    pub delivery_order_detail_id: Uuid,
    /// Animal being shipped
    pub animal_id: i32,
    /// Order the line belongs to
    pub delivery_order_id: i32,
    /// Health check before pickup
    pub pre_delivery_health_status: String,
    /// Health check on arrival, once known
    pub post_delivery_health_status: Option<String>,
}

/// Defines relationships between `DeliveryOrderDetail` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line ships one animal
    #[sea_orm(
        belongs_to = "super::animal::Entity",
        from = "Column::AnimalId",
        to = "super::animal::Column::Id"
    )]
    Animal,
    /// Each line belongs to one delivery order
    #[sea_orm(
        belongs_to = "super::delivery_order::Entity",
        from = "Column::DeliveryOrderId",
        to = "super::delivery_order::Column::Id"
    )]
    DeliveryOrder,
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animal.def()
    }
}

impl Related<super::delivery_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
