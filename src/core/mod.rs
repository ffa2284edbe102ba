/// Password hashing for seeded accounts
pub mod credentials;

/// Customs document service
pub mod document;

/// Schema setup and first-run seeding
pub mod initializer;

/// Line item pricing and document numbering
pub mod pricing;

/// Status codes and result envelopes returned by services
pub mod result;

/// Seed steps and their dependency order
pub mod seed;

pub use document::DocumentService;
pub use initializer::{DatabaseInitializer, InitOutcome};
pub use pricing::Pricing;
pub use result::{ServiceResult, Status};
