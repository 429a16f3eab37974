//! Session-side services.
//!
//! ARCHITECTURE
//! ============
//! `session::SessionService` owns the business logic. Its collaborators
//! (clock, key-value store, user directory) live in their own modules and
//! are injected at construction so tests can swap them out.

pub mod clock;
pub mod directory;
pub mod session;
pub mod storage;
pub mod token;
