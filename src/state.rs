//! Client-side auth state: who is signed in, and whether the stored session
//! has been restored yet.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is the single owner of `AuthState`. Form submissions run
//! `Form::validate_all` first and only reach the session service when the
//! form is clean. Login and signup take `&mut self`, so a context cannot
//! have two submissions in flight.

use std::sync::Arc;

use crate::error::AuthError;
use crate::form::Form;
use crate::form::presets::{FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD};
use crate::services::directory::User;
use crate::services::session::{LoginCredentials, SessionService, SignupCredentials};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Protected views should send the visitor to login.
    #[must_use]
    pub fn should_redirect_unauth(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

/// Owns the auth state and drives the session service.
#[derive(Debug)]
pub struct AuthContext {
    service: Arc<SessionService>,
    state: AuthState,
}

impl AuthContext {
    /// New context in the loading state; call `init` to restore a session.
    #[must_use]
    pub fn new(service: Arc<SessionService>) -> Self {
        Self { service, state: AuthState { user: None, loading: true } }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub fn service(&self) -> &Arc<SessionService> {
        &self.service
    }

    /// Resolve any persisted token to a user and finish loading.
    pub fn init(&mut self) -> Option<&User> {
        self.state.user = self.service.restore();
        self.state.loading = false;
        if let Some(user) = &self.state.user {
            tracing::info!(user_id = %user.id, "restored session");
        }
        self.state.user.as_ref()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let credentials = LoginCredentials { email: email.to_owned(), password: password.to_owned() };
        let response = self.service.login(&credentials).await?;
        Ok(self.state.user.insert(response.user))
    }

    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<&User, AuthError> {
        let credentials = SignupCredentials {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
        };
        let response = self.service.signup(&credentials).await?;
        Ok(self.state.user.insert(response.user))
    }

    /// Clear the persisted token and forget the user.
    pub fn logout(&mut self) {
        self.service.logout();
        self.state.user = None;
    }

    /// Validate a login form and, if clean, log in with its values.
    pub async fn submit_login(&mut self, form: &mut Form) -> Result<&User, AuthError> {
        check_form(form)?;
        let email = form.value(FIELD_EMAIL).to_owned();
        let password = form.value(FIELD_PASSWORD).to_owned();
        self.login(&email, &password).await
    }

    /// Validate a signup form and, if clean, register with its values.
    pub async fn submit_signup(&mut self, form: &mut Form) -> Result<&User, AuthError> {
        check_form(form)?;
        let name = form.value(FIELD_NAME).to_owned();
        let email = form.value(FIELD_EMAIL).to_owned();
        let password = form.value(FIELD_PASSWORD).to_owned();
        let confirm = form.value(FIELD_CONFIRM_PASSWORD).to_owned();
        self.signup(&name, &email, &password, &confirm).await
    }
}

fn check_form(form: &mut Form) -> Result<(), AuthError> {
    if form.validate_all() {
        return Ok(());
    }
    let (field, message) = form.first_error().unwrap_or_default();
    Err(AuthError::Validation { field: field.to_owned(), message: message.to_owned() })
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
