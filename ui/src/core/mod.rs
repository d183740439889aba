//! Platform-neutral state and view-model logic. Nothing in here touches the
//! Dioxus runtime, so every rule can be unit tested directly.

pub mod glyph;
pub mod nav;
pub mod panel;
pub mod session;
pub mod theme;
pub mod view_model;

pub use glyph::Glyph;
pub use nav::{visible_items, NavItem, Visibility, NAV_ITEMS};
pub use panel::PanelOpenFlag;
pub use session::{AuthError, AuthForm, AuthModalKind, AuthState, User, FALLBACK_DISPLAY_NAME};
pub use theme::Theme;
pub use view_model::{AuthSectionModel, NavViewModel};
