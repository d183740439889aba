use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder, NavLink};
use ui::components::{AuthModal, NavigationBar, ThemedRoot};
use ui::core::AuthState;
use ui::views::{Home, Notifications, Profile};
use ui::{use_auth_provider, AuthHandle};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/notifications")]
    Notifications {},
    #[route("/profile")]
    Profile {},
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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });
    use_auth_provider(AuthState::signed_out);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `NavigationBar` which allows us
/// to use the web-specific `Route` enum for the outlet.
#[component]
fn WebShell() -> Element {
    let auth = use_context::<AuthHandle>();
    rsx! {
        ThemedRoot {
            NavigationBar { auth }
            Outlet::<Route> {}
            AuthModal { auth }
        }
    }
}
