//! Animal entity - Inventory that can be shipped on a delivery order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Animal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animals")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Public identifier
    #[sea_orm(unique)]
    pub animal_id: Uuid,
    /// Breed name
    pub breed: String,
    /// Colour or pattern description
    pub color_pattern: String,
    /// Body size
    pub size: f64,
    /// Age in years
    pub age: i32,
    /// Estimated market price
    pub estimated_price: f64,
    /// Current health status label
    pub health_status: String,
    /// Whether the animal can be ordered
    pub is_available: bool,
    /// Country of origin
    pub origin_country: String,
    /// Free-text description
    pub description: Option<String>,
    /// Picture URL
    pub image_url: Option<String>,
    /// Species grouping
    pub animal_type_id: i32,
}

/// Defines relationships between Animal and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each animal belongs to one type
    #[sea_orm(
        belongs_to = "super::animal_type::Entity",
        from = "Column::AnimalTypeId",
        to = "super::animal_type::Column::Id"
    )]
    AnimalType,
    /// An animal may appear on many order detail lines
    #[sea_orm(has_many = "super::delivery_order_detail::Entity")]
    DeliveryOrderDetails,
}

impl Related<super::animal_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnimalType.def()
    }
}

impl Related<super::delivery_order_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryOrderDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
