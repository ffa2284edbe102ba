//! Voucher promotion entity - Discount codes granted to a user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Voucher promotion database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "voucher_promotions")]
pub struct Model {
    /// Internal primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Code the customer enters
    pub voucher_promotion_code: String,
    /// Discount in percent
    pub promotion_rate: f64,
    /// Owning user
    pub user_id: i32,
}

/// Defines relationships between `VoucherPromotion` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each voucher belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
