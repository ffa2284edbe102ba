//! Care task entity - Recurring or one-off animal care chores.
//! Standalone table, no relationships.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Care task database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "care_tasks")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Short task title
    pub task_name: String,
    /// Free-text description
    pub description: String,
    /// Measurement unit for quantity-based tasks (e.g. "kg" of food)
    pub unit: Option<String>,
    /// `"High"`, `"Medium"` or `"Low"`
    pub priority: String,
    /// When the task was created
    pub created_at: DateTime,
    /// When the task is due, if scheduled
    pub due_date: Option<DateTime>,
    /// Name of the person responsible
    pub assigned_to: String,
    /// Whether the task repeats
    pub is_recurring: bool,
    /// Free-text notes
    pub notes: Option<String>,
}

/// `CareTask` has no relationships with the seeded tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
