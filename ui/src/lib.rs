//! Shared UI crate for Next Connect. All components, the auth provider and
//! the platform-neutral view-model core live here; platform crates only
//! define routes and launch.

use dioxus::prelude::*;

pub mod auth;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Navigation bar + platform link registration (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::use_mobile_menu;
    pub use app_navbar::MobileMenu;
    pub use app_navbar::NavBuilder;
    pub use app_navbar::NavLink;
    pub use app_navbar::NavLinks;
    pub use app_navbar::NavigationBar;

    mod auth_controls;
    pub use auth_controls::{AuthModal, AuthSection, SignInButton, SignUpButton, UserButton};

    mod icon;
    pub use icon::Icon;

    mod landing_view;
    pub use landing_view::LandingView;

    pub mod mode_toggle;
    pub use mode_toggle::{ModeToggle, ThemedRoot};

    mod sheet;
    pub use sheet::{Sheet, SheetTrigger};
}

pub use auth::{use_auth_provider, AuthHandle};

/// Shared theme stylesheet (tokens, pages, buttons, auth modal).
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");
