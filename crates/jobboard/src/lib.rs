//! Job board core: job catalog and search, application intake and status
//! tracking, ownership checks, and administrative moderation.

pub mod access;
pub mod accounts;
pub mod applications;
pub mod config;
pub mod error;
pub mod jobs;
pub mod memory;
pub mod moderation;
pub mod telemetry;
