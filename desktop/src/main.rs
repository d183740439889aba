#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder, NavLink, BRAND_NAME};
use ui::components::{AuthModal, NavigationBar, ThemedRoot};
use ui::core::AuthState;
use ui::views::{Home, Notifications, Profile};
use ui::{use_auth_provider, AuthHandle};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/notifications")]
    Notifications {},
    #[route("/profile")]
    Profile {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("{BRAND_NAME} – v{}", env!("CARGO_PKG_VERSION"))),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(link: NavLink) -> Element {
    let on_follow = link.on_follow;
    rsx!(Link {
        class: link.class,
        to: link.to,
        onclick: move |evt| {
            if let Some(handler) = on_follow {
                handler.call(evt);
            }
        },
        {link.children}
    })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    register_nav(NavBuilder { link: nav_link });
    use_auth_provider(AuthState::signed_out);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific layout around the shared `NavigationBar` which allows
/// us to use the desktop-specific `Route` enum for the outlet.
#[component]
fn DesktopShell() -> Element {
    let auth = use_context::<AuthHandle>();
    rsx! {
        ThemedRoot {
            NavigationBar { auth }
            Outlet::<Route> {}
            AuthModal { auth }
        }
    }
}
