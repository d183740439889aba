//! In-memory authentication provider.
//!
//! Views never reach for a global: the platform root calls
//! [`use_auth_provider`] once and hands the resulting [`AuthHandle`] to
//! `NavigationBar` and `LandingView` as a prop. Layout components that have
//! no props of their own can still fetch it with `use_context`.
//!
//! The session lives only in signals. There are no credentials, no tokens
//! and nothing is written to storage.

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::core::{AuthError, AuthForm, AuthModalKind, AuthState, User};

/// Copyable capability over the reactive session.
///
/// Reading through the handle subscribes the calling component, so a
/// sign-in or sign-out re-renders every view holding it in the same pass.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthHandle {
    session: Signal<AuthState>,
    modal: Signal<Option<AuthModalKind>>,
}

impl AuthHandle {
    /// Snapshot for the current render.
    pub fn state(&self) -> AuthState {
        self.session.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_signed_in()
    }

    pub fn pending_modal(&self) -> Option<AuthModalKind> {
        *self.modal.read()
    }

    pub fn open_sign_in(&self) {
        self.open(AuthModalKind::SignIn);
    }

    pub fn open_sign_up(&self) {
        self.open(AuthModalKind::SignUp);
    }

    fn open(&self, kind: AuthModalKind) {
        let mut modal = self.modal;
        modal.set(Some(kind));
    }

    pub fn close_modal(&self) {
        let mut modal = self.modal;
        modal.set(None);
    }

    /// Finish the pending modal flow. On success the session switches to
    /// the new user and the modal closes; on failure nothing changes.
    pub fn complete(&self, kind: AuthModalKind, form: AuthForm) -> Result<User, AuthError> {
        let user = form.into_user(kind)?;
        info!(user = user.display_name(), ?kind, "signed in");

        let mut session = self.session;
        session.set(AuthState::signed_in(user.clone()));
        self.close_modal();
        Ok(user)
    }

    pub fn sign_out(&self) {
        let mut session = self.session;
        if session.read().is_signed_in() {
            info!("signed out");
        }
        session.set(AuthState::signed_out());
    }
}

/// Create the session signals, provide the handle as context and return it.
pub fn use_auth_provider(init: impl FnOnce() -> AuthState + 'static) -> AuthHandle {
    let session = use_signal(init);
    let modal = use_signal(|| None);
    use_context_provider(|| AuthHandle { session, modal })
}
