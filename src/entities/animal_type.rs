//! Animal type entity - Coarse species grouping ("Dog", "Fish", ...).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Animal type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animal_types")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Type label
    pub animal_type_desc: String,
}

/// Defines relationships between `AnimalType` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Animals of this type
    #[sea_orm(has_many = "super::animal::Entity")]
    Animals,
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
