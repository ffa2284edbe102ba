//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod animal;
pub mod animal_type;
pub mod care_task;
pub mod delivery_order;
pub mod delivery_order_detail;
pub mod document;
pub mod document_detail;
pub mod payment;
pub mod sender_information;
pub mod shipping_fee;
pub mod staff;
pub mod user;
pub mod voucher_promotion;

// Re-export specific types to avoid conflicts
pub use animal::{Column as AnimalColumn, Entity as Animal, Model as AnimalModel};
pub use animal_type::{Column as AnimalTypeColumn, Entity as AnimalType, Model as AnimalTypeModel};
pub use care_task::{Column as CareTaskColumn, Entity as CareTask, Model as CareTaskModel};
pub use delivery_order::{
    Column as DeliveryOrderColumn, Entity as DeliveryOrder, Model as DeliveryOrderModel,
};
pub use delivery_order_detail::{
    Column as DeliveryOrderDetailColumn, Entity as DeliveryOrderDetail,
    Model as DeliveryOrderDetailModel,
};
pub use document::{Column as DocumentColumn, Entity as Document, Model as DocumentModel};
pub use document_detail::{
    Column as DocumentDetailColumn, Entity as DocumentDetail, Model as DocumentDetailModel,
};
pub use payment::{Column as PaymentColumn, Entity as Payment, Model as PaymentModel};
pub use sender_information::{
    Column as SenderInformationColumn, Entity as SenderInformation,
    Model as SenderInformationModel,
};
pub use shipping_fee::{
    Column as ShippingFeeColumn, Entity as ShippingFee, Model as ShippingFeeModel,
};
pub use staff::{Column as StaffColumn, Entity as Staff, Model as StaffModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use voucher_promotion::{
    Column as VoucherPromotionColumn, Entity as VoucherPromotion, Model as VoucherPromotionModel,
};
