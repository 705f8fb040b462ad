//! Backend REST Access
//!
//! One `ApiClient` wraps every endpoint, organized per resource. All
//! requests flow through the shared send helpers in `client`, which map
//! transport, status, and decode failures into the `AppError` taxonomy.

mod client;
mod gigs;
mod milestones;
mod rates;
mod transactions;
mod users;

pub use client::ApiClient;
pub use rates::Rates;
pub use users::{Credentials, LoginResponse, RegisterPayload, UserUpdate};
