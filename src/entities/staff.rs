//! Staff entity - Drivers and fish carers who handle deliveries.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff account database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Public identifier
    #[sea_orm(unique)]
    pub staff_id: Uuid,
    /// Display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Date of birth, if known
    pub date_of_birth: Option<Date>,
    /// Contact phone number
    pub phone: String,
    /// Avatar image file or URL
    pub avatar_image: Option<String>,
    /// National identity card number
    pub identity_card: Option<String>,
    /// When the account was created
    pub create_date: Option<DateTime>,
    /// Postal address
    pub address: Option<String>,
    /// Longitude of the address
    pub longitude: Option<f64>,
    /// Latitude of the address
    pub latitude: Option<f64>,
    /// Login name
    pub username: String,
    /// Argon2 PHC hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the account may be used
    pub is_active: bool,
}

/// `Staff` has no relationships with the seeded tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
