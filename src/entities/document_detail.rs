//! Document detail entity - A line item on a customs document.
//!
//! `item_estimate_price` is derived: `item_quantity × item_weight × price_per_kilogram`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Document line item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_details")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Item name (e.g. "Black Koi")
    pub item_name: String,
    /// Item category (e.g. "Fish", "Accessory")
    pub item_category: String,
    /// Weight of one unit in kilograms
    pub item_weight: f64,
    /// Number of units
    pub item_quantity: i32,
    /// Derived line price
    pub item_estimate_price: f64,
    /// Owning document (internal key)
    pub document_id: i32,
}

/// Defines relationships between `DocumentDetail` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one document
    #[sea_orm(
        belongs_to = "super::document::Entity",
        from = "Column::DocumentId",
        to = "super::document::Column::Id"
    )]
    Document,
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
