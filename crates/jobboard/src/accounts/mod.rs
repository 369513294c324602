//! User records, roles, and registration.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{NewUser, Role, User, UserId};
pub use repository::UserStore;
pub use router::account_router;
pub use service::AccountService;
