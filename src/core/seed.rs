//! Seed steps - Inserts fixture rows into empty tables in dependency order.
//!
//! Each [`SeedStep`] owns one table (Users also owns the user's sender profiles and
//! vouchers, Documents also owns the document lines). A step only runs when its table is
//! empty, so running the whole sequence again never duplicates rows.

use crate::{
    config::seed::SeedData,
    core::{credentials::hash_password, pricing::Pricing},
    entities::{
        Animal, AnimalType, CareTask, DeliveryOrder, DeliveryOrderDetail, Document, Payment,
        SenderInformation, ShippingFee, Staff, User, animal, animal_type, care_task,
        delivery_order, delivery_order_detail, document, document_detail, payment,
        sender_information, shipping_fee, staff, user, voucher_promotion,
    },
    errors::{Error, Result},
};
use chrono::{Duration, Months, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use std::{collections::HashMap, fmt};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// One unit of seeding, named after the table it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedStep {
    /// Users with their sender profiles and vouchers
    Users,
    /// Payment methods
    Payments,
    /// Shipping fee tiers
    ShippingFees,
    /// Delivery orders
    DeliveryOrders,
    /// Animal types
    AnimalTypes,
    /// Animals
    Animals,
    /// Animals shipped on delivery orders
    DeliveryOrderDetails,
    /// Care tasks
    CareTasks,
    /// Staff accounts
    Staff,
    /// Documents with their line items
    Documents,
}

/// The order steps run in. Every step comes after the steps it references.
pub const SEED_ORDER: [SeedStep; 10] = [
    SeedStep::Users,
    SeedStep::Payments,
    SeedStep::ShippingFees,
    SeedStep::DeliveryOrders,
    SeedStep::AnimalTypes,
    SeedStep::Animals,
    SeedStep::DeliveryOrderDetails,
    SeedStep::CareTasks,
    SeedStep::Staff,
    SeedStep::Documents,
];

impl SeedStep {
    /// Table name of the step.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Payments => "payments",
            Self::ShippingFees => "shipping_fees",
            Self::DeliveryOrders => "delivery_orders",
            Self::AnimalTypes => "animal_types",
            Self::Animals => "animals",
            Self::DeliveryOrderDetails => "delivery_order_details",
            Self::CareTasks => "care_tasks",
            Self::Staff => "staff",
            Self::Documents => "documents",
        }
    }

    /// Steps whose rows this step references.
    #[must_use]
    pub const fn dependencies(self) -> &'static [Self] {
        match self {
            Self::DeliveryOrders => &[Self::Users, Self::Payments, Self::ShippingFees],
            Self::Animals => &[Self::AnimalTypes],
            Self::DeliveryOrderDetails => &[Self::DeliveryOrders, Self::Animals],
            Self::Documents => &[Self::DeliveryOrders],
            Self::Users
            | Self::Payments
            | Self::ShippingFees
            | Self::AnimalTypes
            | Self::CareTasks
            | Self::Staff => &[],
        }
    }
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a seeding run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Steps that ran, with the number of top-level rows each inserted
    pub seeded: Vec<(SeedStep, usize)>,
    /// Steps skipped because their table already had rows
    pub skipped: Vec<SeedStep>,
}

impl SeedReport {
    /// Total number of top-level rows inserted.
    #[must_use]
    pub fn rows_inserted(&self) -> usize {
        self.seeded.iter().map(|(_, rows)| rows).sum()
    }

    /// Whether the run inserted nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.seeded.is_empty()
    }
}

/// Whether the table owned by `step` has no rows.
pub async fn is_empty<C: ConnectionTrait>(db: &C, step: SeedStep) -> Result<bool> {
    let count = match step {
        SeedStep::Users => User::find().count(db).await?,
        SeedStep::Payments => Payment::find().count(db).await?,
        SeedStep::ShippingFees => ShippingFee::find().count(db).await?,
        SeedStep::DeliveryOrders => DeliveryOrder::find().count(db).await?,
        SeedStep::AnimalTypes => AnimalType::find().count(db).await?,
        SeedStep::Animals => Animal::find().count(db).await?,
        SeedStep::DeliveryOrderDetails => DeliveryOrderDetail::find().count(db).await?,
        SeedStep::CareTasks => CareTask::find().count(db).await?,
        SeedStep::Staff => Staff::find().count(db).await?,
        SeedStep::Documents => Document::find().count(db).await?,
    };
    Ok(count == 0)
}

/// Runs every step in [`SEED_ORDER`] whose table is empty.
///
/// Dangling references surface as `Error::SeedReference`; any other failure is wrapped in
/// `Error::Seed` naming the step. The caller owns the transaction around `db`.
#[instrument(skip(db, data, pricing))]
pub async fn seed_all<C: ConnectionTrait>(
    db: &C,
    data: &SeedData,
    pricing: &Pricing,
    now: NaiveDateTime,
) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for step in SEED_ORDER {
        if !is_empty(db, step).await? {
            debug!("Table {step} already has rows, skipping");
            report.skipped.push(step);
            continue;
        }

        let rows = seed_step(db, step, data, pricing, now)
            .await
            .map_err(|e| match e {
                Error::SeedReference { .. } => e,
                other => Error::Seed {
                    step: step.name(),
                    source: Box::new(other),
                },
            })?;
        info!("Seeded {rows} rows into {step}");
        report.seeded.push((step, rows));
    }

    Ok(report)
}

/// Inserts the fixtures of one step and returns the number of top-level rows written.
pub async fn seed_step<C: ConnectionTrait>(
    db: &C,
    step: SeedStep,
    data: &SeedData,
    pricing: &Pricing,
    now: NaiveDateTime,
) -> Result<usize> {
    match step {
        SeedStep::Users => seed_users(db, data, now).await,
        SeedStep::Payments => {
            for label in &data.payments {
                payment::ActiveModel {
                    payment_method: Set(label.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            Ok(data.payments.len())
        }
        SeedStep::ShippingFees => {
            for fee in &data.shipping_fees {
                shipping_fee::ActiveModel {
                    distance_range_from: Set(fee.distance_range_from),
                    distance_range_to: Set(fee.distance_range_to),
                    service_code: Set(fee.service_code.clone()),
                    weight_class: Set(fee.weight_class),
                    base_fee: Set(fee.base_fee),
                    estimated_time: Set(fee.estimated_time.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            Ok(data.shipping_fees.len())
        }
        SeedStep::DeliveryOrders => seed_delivery_orders(db, data, now).await,
        SeedStep::AnimalTypes => {
            for label in &data.animal_types {
                animal_type::ActiveModel {
                    animal_type_desc: Set(label.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            Ok(data.animal_types.len())
        }
        SeedStep::Animals => seed_animals(db, data).await,
        SeedStep::DeliveryOrderDetails => seed_delivery_order_details(db, data).await,
        SeedStep::CareTasks => {
            for task in &data.care_tasks {
                care_task::ActiveModel {
                    task_name: Set(task.task_name.clone()),
                    description: Set(task.description.clone()),
                    unit: Set(task.unit.clone()),
                    priority: Set(task.priority.clone()),
                    created_at: Set(now),
                    due_date: Set(task
                        .due_in_days
                        .map(|days| shift_days(now, days, "due_in_days"))
                        .transpose()?),
                    assigned_to: Set(task.assigned_to.clone()),
                    is_recurring: Set(task.is_recurring),
                    notes: Set(task.notes.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            Ok(data.care_tasks.len())
        }
        SeedStep::Staff => seed_staff(db, data, now).await,
        SeedStep::Documents => seed_documents(db, data, pricing).await,
    }
}

/// Resolves a 1-based fixture position against ids listed in insertion order.
fn id_at(ids: &[i32], position: usize, step: SeedStep, target: &str) -> Result<i32> {
    position
        .checked_sub(1)
        .and_then(|index| ids.get(index))
        .copied()
        .ok_or_else(|| Error::SeedReference {
            step: step.name(),
            reference: format!("{target} #{position}"),
        })
}

/// `now` moved by `days`, or a config error when the result is not representable.
fn shift_days(now: NaiveDateTime, days: i64, field: &str) -> Result<NaiveDateTime> {
    Duration::try_days(days)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or_else(|| Error::Config {
            message: format!("{field} = {days} is out of the supported date range"),
        })
}

fn id_for_label(
    labels: &HashMap<String, i32>,
    label: &str,
    step: SeedStep,
    target: &str,
) -> Result<i32> {
    labels.get(label).copied().ok_or_else(|| Error::SeedReference {
        step: step.name(),
        reference: format!("{target} '{label}'"),
    })
}

async fn seed_users<C: ConnectionTrait>(
    db: &C,
    data: &SeedData,
    now: NaiveDateTime,
) -> Result<usize> {
    for fixture in &data.users {
        let stored = user::ActiveModel {
            user_id: Set(Uuid::new_v4()),
            full_name: Set(fixture.full_name.clone()),
            email: Set(fixture.email.clone()),
            date_of_birth: Set(fixture.date_of_birth),
            phone: Set(fixture.phone.clone()),
            avatar_image: Set(None),
            identity_card: Set(None),
            create_date: Set(Some(now)),
            address: Set(fixture.address.clone()),
            longitude: Set(None),
            latitude: Set(None),
            username: Set(fixture.username.clone()),
            password_hash: Set(hash_password(&fixture.password)?),
            is_active: Set(Some(true)),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for sender in &fixture.sender_informations {
            sender_information::ActiveModel {
                sender_name: Set(sender.sender_name.clone()),
                sender_phone: Set(sender.sender_phone.clone()),
                street: Set(sender.street.clone()),
                ward: Set(sender.ward.clone()),
                district: Set(sender.district.clone()),
                city_province: Set(sender.city_province.clone()),
                latitude: Set(sender.latitude),
                longitude: Set(sender.longitude),
                user_id: Set(stored.id),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        for voucher in &fixture.voucher_promotions {
            voucher_promotion::ActiveModel {
                voucher_promotion_code: Set(voucher.voucher_promotion_code.clone()),
                promotion_rate: Set(voucher.promotion_rate),
                user_id: Set(stored.id),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }
    Ok(data.users.len())
}

async fn seed_delivery_orders<C: ConnectionTrait>(
    db: &C,
    data: &SeedData,
    now: NaiveDateTime,
) -> Result<usize> {
    let step = SeedStep::DeliveryOrders;
    let fee_ids: Vec<i32> = ShippingFee::find()
        .order_by_asc(shipping_fee::Column::Id)
        .all(db)
        .await?
        .iter()
        .map(|fee| fee.id)
        .collect();
    let sender_ids: Vec<i32> = SenderInformation::find()
        .order_by_asc(sender_information::Column::Id)
        .all(db)
        .await?
        .iter()
        .map(|sender| sender.id)
        .collect();
    let payments: HashMap<String, i32> = Payment::find()
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.payment_method, p.id))
        .collect();

    for order in &data.delivery_orders {
        delivery_order::ActiveModel {
            recipient_name: Set(order.recipient_name.clone()),
            recipient_address: Set(order.recipient_address.clone()),
            recipient_longitude: Set(order.recipient_longitude),
            recipient_latitude: Set(order.recipient_latitude),
            recipient_appointment_time: Set(order.recipient_appointment_time.clone()),
            recipient_phone: Set(order.recipient_phone.clone()),
            create_date: Set(shift_days(
                now,
                order.created_days_ago.saturating_neg(),
                "created_days_ago",
            )?),
            delivery_date: Set(order
                .delivery_in_days
                .map(|days| shift_days(now, days, "delivery_in_days"))
                .transpose()?),
            order_status: Set(order.order_status.clone()),
            total_amount: Set(order.total_amount),
            tax_fee: Set(order.tax_fee),
            is_purchased: Set(order.is_purchased),
            is_sender_purchase: Set(order.is_sender_purchase),
            is_international: Set(order.is_international),
            shipping_fee_id: Set(id_at(&fee_ids, order.shipping_fee, step, "shipping fee")?),
            payment_id: Set(id_for_label(&payments, &order.payment, step, "payment")?),
            sender_information_id: Set(id_at(&sender_ids, order.sender, step, "sender")?),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(data.delivery_orders.len())
}

async fn seed_animals<C: ConnectionTrait>(db: &C, data: &SeedData) -> Result<usize> {
    let types: HashMap<String, i32> = AnimalType::find()
        .all(db)
        .await?
        .into_iter()
        .map(|t| (t.animal_type_desc, t.id))
        .collect();

    for fixture in &data.animals {
        animal::ActiveModel {
            animal_id: Set(Uuid::new_v4()),
            breed: Set(fixture.breed.clone()),
            color_pattern: Set(fixture.color_pattern.clone()),
            size: Set(fixture.size),
            age: Set(fixture.age),
            estimated_price: Set(fixture.estimated_price),
            health_status: Set(fixture.health_status.clone()),
            is_available: Set(fixture.is_available),
            origin_country: Set(fixture.origin_country.clone()),
            description: Set(fixture.description.clone()),
            image_url: Set(fixture.image_url.clone()),
            animal_type_id: Set(id_for_label(
                &types,
                &fixture.animal_type,
                SeedStep::Animals,
                "animal type",
            )?),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(data.animals.len())
}

async fn seed_delivery_order_details<C: ConnectionTrait>(
    db: &C,
    data: &SeedData,
) -> Result<usize> {
    let step = SeedStep::DeliveryOrderDetails;
    let order_ids: Vec<i32> = DeliveryOrder::find()
        .order_by_asc(delivery_order::Column::Id)
        .all(db)
        .await?
        .iter()
        .map(|order| order.id)
        .collect();
    let animal_ids: Vec<i32> = Animal::find()
        .order_by_asc(animal::Column::Id)
        .all(db)
        .await?
        .iter()
        .map(|animal| animal.id)
        .collect();

    for detail in &data.delivery_order_details {
        delivery_order_detail::ActiveModel {
            delivery_order_detail_id: Set(Uuid::new_v4()),
            animal_id: Set(id_at(&animal_ids, detail.animal, step, "animal")?),
            delivery_order_id: Set(id_at(
                &order_ids,
                detail.delivery_order,
                step,
                "delivery order",
            )?),
            pre_delivery_health_status: Set(detail.pre_delivery_health_status.clone()),
            post_delivery_health_status: Set(detail.post_delivery_health_status.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(data.delivery_order_details.len())
}

async fn seed_staff<C: ConnectionTrait>(
    db: &C,
    data: &SeedData,
    now: NaiveDateTime,
) -> Result<usize> {
    for fixture in &data.staff {
        staff::ActiveModel {
            staff_id: Set(Uuid::new_v4()),
            full_name: Set(fixture.full_name.clone()),
            email: Set(fixture.email.clone()),
            date_of_birth: Set(fixture.date_of_birth),
            phone: Set(fixture.phone.clone()),
            avatar_image: Set(fixture.avatar_image.clone()),
            identity_card: Set(fixture.identity_card.clone()),
            create_date: Set(now.checked_sub_months(Months::new(fixture.created_months_ago))),
            address: Set(fixture.address.clone()),
            longitude: Set(fixture.longitude),
            latitude: Set(fixture.latitude),
            username: Set(fixture.username.clone()),
            password_hash: Set(hash_password(&fixture.password)?),
            is_active: Set(fixture.is_active),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(data.staff.len())
}

async fn seed_documents<C: ConnectionTrait>(
    db: &C,
    data: &SeedData,
    pricing: &Pricing,
) -> Result<usize> {
    let order_ids: Vec<i32> = DeliveryOrder::find()
        .order_by_asc(delivery_order::Column::Id)
        .all(db)
        .await?
        .iter()
        .map(|order| order.id)
        .collect();

    for fixture in &data.documents {
        let delivery_order_id = id_at(
            &order_ids,
            fixture.delivery_order,
            SeedStep::Documents,
            "delivery order",
        )?;
        let (prices, shipping_fee) = pricing.price_lines(
            fixture
                .details
                .iter()
                .map(|line| (line.item_quantity, line.item_weight)),
        );

        let stored = document::ActiveModel {
            document_id: Set(Uuid::new_v4()),
            document_number: Set(fixture.document_number.clone()),
            document_type: Set(fixture.document_type.clone()),
            issue_date: Set(fixture.issue_date),
            expiration_date: Set(fixture.expiration_date),
            consignee_name: Set(fixture.consignee_name.clone()),
            consignee_phone: Set(fixture.consignee_phone.clone()),
            consignee_address: Set(fixture.consignee_address.clone()),
            exporter_name: Set(fixture.exporter_name.clone()),
            exporter_phone: Set(fixture.exporter_phone.clone()),
            exporter_address: Set(fixture.exporter_address.clone()),
            dispatch_method: Set(fixture.dispatch_method.clone()),
            transportation_type: Set(fixture.transportation_type.clone()),
            shipping_fee: Set(Some(shipping_fee)),
            delivery_order_id: Set(delivery_order_id),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for (line, item_estimate_price) in fixture.details.iter().zip(prices) {
            document_detail::ActiveModel {
                item_name: Set(line.item_name.clone()),
                item_category: Set(line.item_category.clone()),
                item_weight: Set(line.item_weight),
                item_quantity: Set(line.item_quantity),
                item_estimate_price: Set(item_estimate_price),
                document_id: Set(stored.id),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }
    Ok(data.documents.len())
}
