//! `cottonwaste-auth` — read-only view of the externally owned session.
//!
//! This crate performs no authentication itself; it models who is signed in
//! and lets the UI observe changes.

pub mod roles;
pub mod session;
pub mod user;

pub use roles::{UnknownRole, UserRole};
pub use session::{AuthSession, AuthSubscription};
pub use user::{AuthState, AuthenticatedUser};
