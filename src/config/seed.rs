//! Seed fixture loading from seed.toml
//!
//! Seed rows are plain data. The initializer reads them from a TOML file (or the copy
//! bundled into the binary) and inserts them into empty tables on first run.
//!
//! Fixtures never hold database ids. Rows refer to previously seeded rows by 1-based
//! position (`shipping_fee = 2` is the second shipping fee row) or by label
//! (`payment = "Visa"`, `animal_type = "Fish"`). Timestamps are relative to the moment
//! of seeding (`created_days_ago`, `delivery_in_days`) so a fresh database always looks
//! current.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

const BUNDLED_SEED: &str = include_str!("../../seed.toml");

/// Every fixture, one list per seeded table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    /// Payment method labels
    pub payments: Vec<String>,
    /// Animal type labels
    pub animal_types: Vec<String>,
    /// Customer accounts with their sender profiles and vouchers
    pub users: Vec<UserFixture>,
    /// Shipping fee tiers
    pub shipping_fees: Vec<ShippingFeeFixture>,
    /// Delivery orders
    pub delivery_orders: Vec<DeliveryOrderFixture>,
    /// Animals
    pub animals: Vec<AnimalFixture>,
    /// Animals shipped on delivery orders
    pub delivery_order_details: Vec<DeliveryOrderDetailFixture>,
    /// Care tasks
    pub care_tasks: Vec<CareTaskFixture>,
    /// Staff accounts
    pub staff: Vec<StaffFixture>,
    /// Customs documents with their line items
    pub documents: Vec<DocumentFixture>,
}

/// A customer account. `password` is a development credential and is hashed on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct UserFixture {
    /// Display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Login name
    pub username: Option<String>,
    /// Development password, hashed before it is stored
    pub password: String,
    /// Date of birth, if known
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Sender profiles owned by the user
    #[serde(default)]
    pub sender_informations: Vec<SenderInformationFixture>,
    /// Vouchers owned by the user
    #[serde(default)]
    pub voucher_promotions: Vec<VoucherPromotionFixture>,
}

/// A sender profile owned by the enclosing user
#[derive(Debug, Clone, Deserialize)]
pub struct SenderInformationFixture {
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
    /// Latitude of the address
    pub latitude: f64,
    /// Longitude of the address
    pub longitude: f64,
}

/// A voucher owned by the enclosing user
#[derive(Debug, Clone, Deserialize)]
pub struct VoucherPromotionFixture {
    /// Code the customer enters
    pub voucher_promotion_code: String,
    /// Discount in percent
    pub promotion_rate: f64,
}

/// A shipping fee tier
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingFeeFixture {
    /// Lower bound of the distance range in kilometres
    pub distance_range_from: f64,
    /// Upper bound of the distance range in kilometres
    pub distance_range_to: f64,
    /// Service code: `"STD"`, `"EXP"` or `"PRM"`
    pub service_code: String,
    /// Weight class the tier applies to
    pub weight_class: i32,
    /// Base fee charged for the tier
    pub base_fee: f64,
    /// Delivery estimate label
    pub estimated_time: String,
}

/// A delivery order
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryOrderFixture {
    /// Who receives the shipment
    pub recipient_name: String,
    /// Where the shipment goes
    pub recipient_address: String,
    /// Longitude of the recipient address
    pub recipient_longitude: f64,
    /// Latitude of the recipient address
    pub recipient_latitude: f64,
    /// Requested appointment, free text
    #[serde(default)]
    pub recipient_appointment_time: Option<String>,
    /// Recipient contact phone
    pub recipient_phone: String,
    /// Days before seeding that the order was created
    pub created_days_ago: i64,
    /// Days after seeding the order is delivered; negative for the past
    #[serde(default)]
    pub delivery_in_days: Option<i64>,
    /// Free-text status label
    pub order_status: String,
    /// Order total
    pub total_amount: f64,
    /// Tax charged on the order, if any
    #[serde(default)]
    pub tax_fee: Option<f64>,
    /// Whether the order has been paid
    pub is_purchased: bool,
    /// Whether the sender pays
    pub is_sender_purchase: bool,
    /// Whether the shipment crosses a border
    pub is_international: bool,
    /// 1-based position of the shipping fee row
    pub shipping_fee: usize,
    /// Payment method label
    pub payment: String,
    /// 1-based position of the sender profile row
    pub sender: usize,
}

/// An animal
#[derive(Debug, Clone, Deserialize)]
pub struct AnimalFixture {
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
    #[serde(default)]
    pub description: Option<String>,
    /// Picture URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Animal type label
    pub animal_type: String,
}

/// An animal shipped on a delivery order
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryOrderDetailFixture {
    /// 1-based position of the delivery order row
    pub delivery_order: usize,
    /// 1-based position of the animal row
    pub animal: usize,
    /// Health check before pickup
    pub pre_delivery_health_status: String,
    /// Health check on arrival, once known
    #[serde(default)]
    pub post_delivery_health_status: Option<String>,
}

/// A care task
#[derive(Debug, Clone, Deserialize)]
pub struct CareTaskFixture {
    /// Short task title
    pub task_name: String,
    /// Free-text description
    pub description: String,
    /// Measurement unit for quantity-based tasks
    #[serde(default)]
    pub unit: Option<String>,
    /// `"High"`, `"Medium"` or `"Low"`
    pub priority: String,
    /// Days after seeding the task is due
    #[serde(default)]
    pub due_in_days: Option<i64>,
    /// Name of the person responsible
    pub assigned_to: String,
    /// Whether the task repeats
    pub is_recurring: bool,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// A staff account. `password` is a development credential and is hashed on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffFixture {
    /// Display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Date of birth, if known
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Contact phone number
    pub phone: String,
    /// Avatar image file or URL
    #[serde(default)]
    pub avatar_image: Option<String>,
    /// National identity card number
    #[serde(default)]
    pub identity_card: Option<String>,
    /// Months before seeding that the account was created
    #[serde(default)]
    pub created_months_ago: u32,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Longitude of the address
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Latitude of the address
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Login name
    pub username: String,
    /// Development password, hashed before it is stored
    pub password: String,
    /// Whether the account may be used
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

const fn active_by_default() -> bool {
    true
}

/// A customs document. Line prices and the shipping fee are computed at seed time.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentFixture {
    /// Document number, `DOC` followed by digits
    pub document_number: String,
    /// Free-text document type
    pub document_type: String,
    /// Date the document was issued
    pub issue_date: NaiveDate,
    /// Date the document stops being valid
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    /// Consignee contact name
    #[serde(default)]
    pub consignee_name: Option<String>,
    /// Consignee contact phone
    #[serde(default)]
    pub consignee_phone: Option<String>,
    /// Consignee address
    #[serde(default)]
    pub consignee_address: Option<String>,
    /// Exporter contact name
    #[serde(default)]
    pub exporter_name: Option<String>,
    /// Exporter contact phone
    #[serde(default)]
    pub exporter_phone: Option<String>,
    /// Exporter address
    #[serde(default)]
    pub exporter_address: Option<String>,
    /// How the goods are dispatched
    #[serde(default)]
    pub dispatch_method: Option<String>,
    /// Vehicle type
    #[serde(default)]
    pub transportation_type: Option<String>,
    /// 1-based position of the delivery order row
    pub delivery_order: usize,
    /// Line items; prices are computed at seed time
    #[serde(default)]
    pub details: Vec<DocumentDetailFixture>,
}

/// A document line item
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentDetailFixture {
    /// Item name
    pub item_name: String,
    /// Item category
    pub item_category: String,
    /// Weight of one unit in kilograms
    pub item_weight: f64,
    /// Number of units
    pub item_quantity: i32,
}

/// Parses seed fixtures from a TOML string.
///
/// # Errors
/// Returns `Error::Config` if the TOML is invalid or a required field is missing.
pub fn parse_seed_data(contents: &str) -> Result<SeedData> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed fixtures: {e}"),
    })
}

/// Loads seed fixtures from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or parsed.
pub fn load_seed_data<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path_ref = path.as_ref();
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    parse_seed_data(&contents)
}

/// Returns the fixtures bundled into the binary.
///
/// # Errors
/// Returns `Error::Config` if the bundled file is malformed.
pub fn bundled_seed_data() -> Result<SeedData> {
    parse_seed_data(BUNDLED_SEED)
}
