//! Form validation and mock session handling for login/signup flows.
//!
//! ARCHITECTURE
//! ============
//! Two independent pieces meet only at the auth context:
//! - `form` owns field values, errors and touched flags, driven by
//!   declarative `FieldRule`s.
//! - `services` owns the user directory, the mock token codec and the
//!   persisted current-session token.
//!
//! `state::AuthContext` validates a form and, when it passes, calls the
//! session service and caches the resulting user.

pub mod config;
pub mod error;
pub mod form;
pub mod services;
pub mod state;

pub use config::AuthConfig;
pub use error::{AuthError, ErrorCode};
pub use form::{FieldRule, Form};
pub use services::directory::{User, UserDirectory};
pub use services::session::{AuthResponse, LoginCredentials, SessionService, SignupCredentials};
pub use state::{AuthContext, AuthState};
