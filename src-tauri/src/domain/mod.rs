//! Domain Layer
//!
//! Entities as consumed from the backend, plus the pure client-side logic:
//! CSV import validation, category aggregation, calendar indexing.
//! No networking in this layer.

mod gig;
mod milestone;
mod transaction;
mod user;

pub mod calendar;
pub mod csv_import;
pub mod summary;

pub use gig::{Gig, GigDraft, GigStatus};
pub use milestone::{Milestone, MilestoneDraft, MilestoneStatus};
pub use transaction::{Transaction, TransactionDraft, TransactionKind, CREDIT_TAX_PERCENTAGE, UNCATEGORIZED};
pub use user::User;
