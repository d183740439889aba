//! Declared navigation entries and sign-in gating.

use super::glyph::Glyph;
use super::session::AuthState;

/// Who may see a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    SignedIn,
}

impl Visibility {
    pub fn allows(self, auth: &AuthState) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::SignedIn => auth.is_signed_in(),
        }
    }
}

/// One navigation entry as declared.
///
/// `label_key` is the Fluent message id for the display name; `name` is the
/// en-US label kept alongside for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub label_key: &'static str,
    pub destination: &'static str,
    pub icon: Glyph,
    pub visibility: Visibility,
}

impl NavItem {
    pub fn visible(&self, auth: &AuthState) -> bool {
        self.visibility.allows(auth)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        label_key: "nav-home",
        destination: "/",
        icon: Glyph::Home,
        visibility: Visibility::Always,
    },
    NavItem {
        name: "Notifications",
        label_key: "nav-notifications",
        destination: "/notifications",
        icon: Glyph::Bell,
        visibility: Visibility::SignedIn,
    },
    NavItem {
        name: "Profile",
        label_key: "nav-profile",
        destination: "/profile",
        icon: Glyph::User,
        visibility: Visibility::SignedIn,
    },
];

/// Items visible for `auth`, in declaration order. The source slice is
/// never touched.
pub fn visible_items(items: &[NavItem], auth: &AuthState) -> Vec<NavItem> {
    items.iter().filter(|item| item.visible(auth)).copied().collect()
}
