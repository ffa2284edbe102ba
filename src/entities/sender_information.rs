//! Sender information entity - Pickup addresses a user ships from.
//! Delivery orders reference exactly one sender profile.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sender profile database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sender_informations")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Name printed on the shipment
    pub sender_name: String,
    /// Phone used for pickup coordination
    pub sender_phone: String,
    /// Street line of the pickup address
    pub street: String,
    /// Ward of the pickup address
    pub ward: String,
    /// District of the pickup address
    pub district: String,
    /// City or province of the pickup address
    pub city_province: String,
    /// Latitude of the pickup address
    pub latitude: f64,
    /// Longitude of the pickup address
    pub longitude: f64,
    /// Owning user
    pub user_id: i32,
}

/// Defines relationships between `SenderInformation` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each sender profile belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One sender profile is used by many delivery orders
    #[sea_orm(has_many = "super::delivery_order::Entity")]
    DeliveryOrders,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::delivery_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
