//! User entity - Customer accounts that own sender profiles and voucher promotions.
//!
//! Passwords are never stored; `password_hash` holds an Argon2 PHC string.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Public identifier
    #[sea_orm(unique)]
    pub user_id: Uuid,
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
    pub username: Option<String>,
    /// Argon2 PHC hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the account may be used
    pub is_active: Option<bool>,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many sender profiles
    #[sea_orm(has_many = "super::sender_information::Entity")]
    SenderInformations,
    /// One user has many voucher promotions
    #[sea_orm(has_many = "super::voucher_promotion::Entity")]
    VoucherPromotions,
}

impl Related<super::sender_information::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SenderInformations.def()
    }
}

impl Related<super::voucher_promotion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VoucherPromotions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
