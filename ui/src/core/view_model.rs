//! Render-ready data for one pass of the navigation bar.
//!
//! Desktop and mobile branches both read from the same `NavViewModel`, so
//! the link list and the auth section can never disagree about sign-in
//! status within a render.

use super::nav::{visible_items, NavItem};
use super::session::{AuthState, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSectionModel {
    SignedIn { display_name: String, initial: String },
    SignedOut,
}

impl AuthSectionModel {
    pub fn from_state(auth: &AuthState) -> Self {
        match auth.user() {
            Some(user) => Self::signed_in(user),
            None => Self::SignedOut,
        }
    }

    fn signed_in(user: &User) -> Self {
        Self::SignedIn {
            display_name: user.display_name().to_owned(),
            initial: user.initial(),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    /// Name shown next to the account menu in the mobile sheet.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::SignedIn { display_name, .. } => Some(display_name),
            Self::SignedOut => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavViewModel {
    pub items: Vec<NavItem>,
    pub auth: AuthSectionModel,
}

impl NavViewModel {
    pub fn compute(declared: &[NavItem], auth: &AuthState) -> Self {
        Self {
            items: visible_items(declared, auth),
            auth: AuthSectionModel::from_state(auth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::{Visibility, NAV_ITEMS};

    #[test]
    fn signed_out_model() {
        let vm = NavViewModel::compute(NAV_ITEMS, &AuthState::signed_out());
        assert_eq!(vm.auth, AuthSectionModel::SignedOut);
        assert!(vm.items.iter().all(|i| i.visibility == Visibility::Always));
    }

    #[test]
    fn items_and_auth_agree_on_status() {
        for auth in [
            AuthState::signed_out(),
            AuthState::signed_in(User::with_first_name("Ann")),
        ] {
            let vm = NavViewModel::compute(NAV_ITEMS, &auth);
            let has_gated = vm.items.iter().any(|i| i.visibility == Visibility::SignedIn);
            assert_eq!(has_gated, vm.auth.is_signed_in());
        }
    }

    #[test]
    fn mobile_label_uses_fallback_chain() {
        let cases = [
            (User::with_first_name("Ann"), "Ann"),
            (User::with_username("ann99"), "ann99"),
            (User::default(), "User"),
        ];
        for (user, expected) in cases {
            let vm = NavViewModel::compute(NAV_ITEMS, &AuthState::signed_in(user));
            assert_eq!(vm.auth.display_name(), Some(expected));
        }
    }
}
