//! Tauri Commands
//!
//! Thin handlers bridging the frontend to the api/domain layers.
//! Errors cross the IPC boundary as display strings.

mod auth_cmd;
mod gig_cmd;
mod milestone_cmd;
mod summary_cmd;
mod transaction_cmd;

pub use auth_cmd::*;
pub use gig_cmd::*;
pub use milestone_cmd::*;
pub use summary_cmd::*;
pub use transaction_cmd::*;
