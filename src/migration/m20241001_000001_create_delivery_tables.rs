//! Creates every delivery table from the entity definitions.
//!
//! Tables are created parents first so foreign keys always point at an existing table,
//! and dropped in the reverse order.

use crate::entities::{
    Animal, AnimalType, CareTask, DeliveryOrder, DeliveryOrderDetail, Document, DocumentDetail,
    Payment, SenderInformation, ShippingFee, Staff, User, VoucherPromotion,
};
use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn create_from_entity<E>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let mut table = schema.create_table_from_entity(entity);
    manager.create_table(table.if_not_exists().to_owned()).await
}

async fn drop_table<E>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait + Iden + 'static,
{
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        create_from_entity(manager, &schema, User).await?;
        create_from_entity(manager, &schema, SenderInformation).await?;
        create_from_entity(manager, &schema, VoucherPromotion).await?;
        create_from_entity(manager, &schema, Payment).await?;
        create_from_entity(manager, &schema, ShippingFee).await?;
        create_from_entity(manager, &schema, DeliveryOrder).await?;
        create_from_entity(manager, &schema, AnimalType).await?;
        create_from_entity(manager, &schema, Animal).await?;
        create_from_entity(manager, &schema, DeliveryOrderDetail).await?;
        create_from_entity(manager, &schema, CareTask).await?;
        create_from_entity(manager, &schema, Staff).await?;
        create_from_entity(manager, &schema, Document).await?;
        create_from_entity(manager, &schema, DocumentDetail).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table(manager, DocumentDetail).await?;
        drop_table(manager, Document).await?;
        drop_table(manager, Staff).await?;
        drop_table(manager, CareTask).await?;
        drop_table(manager, DeliveryOrderDetail).await?;
        drop_table(manager, Animal).await?;
        drop_table(manager, AnimalType).await?;
        drop_table(manager, DeliveryOrder).await?;
        drop_table(manager, ShippingFee).await?;
        drop_table(manager, Payment).await?;
        drop_table(manager, VoucherPromotion).await?;
        drop_table(manager, SenderInformation).await?;
        drop_table(manager, User).await?;

        Ok(())
    }
}
