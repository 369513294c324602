//! Administrator-only operations. None of these consult job ownership.

pub mod router;
pub mod service;

pub use router::admin_router;
pub use service::{ModerationService, Statistics};
