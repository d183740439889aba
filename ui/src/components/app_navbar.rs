use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::auth::AuthHandle;
use crate::components::{AuthSection, Icon, Sheet, SheetTrigger};
use crate::core::{NavItem, NavViewModel, PanelOpenFlag, NAV_ITEMS};
use crate::i18n::{self, tr};
use crate::t;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Fixed brand text.
pub const BRAND_NAME: &str = "Next Connect";

/// One link as handed to the platform's builder.
#[derive(Clone)]
pub struct NavLink {
    pub to: &'static str,
    pub class: &'static str,
    /// Fired when the link is followed, before navigation.
    pub on_follow: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

/// Platforms register a `NavBuilder` so links become router `Link`s for
/// their own `Route` enum; `ui` never sees that enum.
///
/// Without a registered builder links fall back to plain anchors, which is
/// what headless renders in tests get.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder, NavLink};
/// fn nav_link(link: NavLink) -> Element {
///     let on_follow = link.on_follow;
///     rsx!(Link {
///         class: link.class,
///         to: link.to,
///         onclick: move |evt| if let Some(h) = on_follow { h.call(evt) },
///         {link.children}
///     })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
pub struct NavBuilder {
    pub link: fn(NavLink) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

fn render_link(link: NavLink) -> Element {
    if let Some(builder) = NAV_BUILDER.get() {
        return (builder.link)(link);
    }

    let on_follow = link.on_follow;
    rsx! {
        a {
            class: link.class,
            href: link.to,
            onclick: move |evt| {
                if let Some(handler) = on_follow {
                    handler.call(evt);
                }
            },
            {link.children}
        }
    }
}

/// Open state of the mobile sheet. Every transition the navigation bar
/// wires up goes through here.
#[derive(Clone, Copy, PartialEq)]
pub struct MobileMenu {
    flag: Signal<PanelOpenFlag>,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.flag.cloned().is_open()
    }

    /// Menu button.
    pub fn toggle(&self) {
        self.apply(self.flag.cloned().toggled());
    }

    /// Overlay and close button report `false`.
    pub fn set_open(&self, open: bool) {
        self.apply(self.flag.cloned().with_open(open));
    }

    /// A link inside the sheet was followed.
    pub fn follow_link(&self) {
        self.apply(self.flag.cloned().after_follow(true));
    }

    fn apply(&self, next: PanelOpenFlag) {
        debug!(open = next.is_open(), "mobile panel");
        let mut flag = self.flag;
        flag.set(next);
    }
}

/// A closed mobile menu owned by the calling component.
pub fn use_mobile_menu() -> MobileMenu {
    MobileMenu {
        flag: use_signal(PanelOpenFlag::default),
    }
}

/// The filtered item list, laid out for one variant.
#[component]
pub fn NavLinks(
    items: Vec<NavItem>,
    #[props(default)] mobile: bool,
    on_follow: Option<EventHandler<MouseEvent>>,
) -> Element {
    let (list_class, link_class) = if mobile {
        ("nav-links nav-links--mobile", "nav-link nav-link--mobile")
    } else {
        ("nav-links nav-links--desktop", "nav-link")
    };

    rsx! {
        div { class: list_class,
            for item in items {
                {render_link(NavLink {
                    to: item.destination,
                    class: link_class,
                    on_follow,
                    children: rsx! {
                        Icon { glyph: item.icon, class: "nav-link__icon" }
                        span { class: "nav-link__label", {tr(item.label_key)} }
                        div { class: "nav-link__glow" }
                    },
                })}
            }
        }
    }
}

/// Sticky top bar: brand, gated links, auth section, and the mobile sheet
/// that repeats the same links and auth section below the breakpoint.
///
/// `menu` lets a parent hold the sheet state; by default the bar owns it.
#[component]
pub fn NavigationBar(auth: AuthHandle, menu: Option<MobileMenu>) -> Element {
    i18n::init();

    let own_menu = use_mobile_menu();
    let menu = menu.unwrap_or(own_menu);

    // One snapshot feeds both variants.
    let state = auth.state();
    let vm = NavViewModel::compute(NAV_ITEMS, &state);
    let open = menu.is_open();
    let signed_in = if state.is_signed_in() { "true" } else { "false" };
    debug!(
        signed_in = state.is_signed_in(),
        items = vm.items.len(),
        panel_open = open,
        "navigation render"
    );

    let toggle = move |_: MouseEvent| menu.toggle();
    let set_open = move |value: bool| menu.set_open(value);
    let follow_mobile = move |_: MouseEvent| menu.follow_link();

    let brand = render_link(NavLink {
        to: "/",
        class: "navbar__brand",
        on_follow: None,
        children: rsx! {
            span { class: "navbar__brand-mark", aria_hidden: "true",
                span { class: "navbar__brand-spark" }
            }
            span { class: "navbar__brand-name", "{BRAND_NAME}" }
        },
    });

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav {
            id: "navbar",
            class: "navbar",
            "data-signed-in": signed_in,
            div { class: "navbar__inner",
                {brand}

                div { class: "navbar__desktop",
                    NavLinks { items: vm.items.clone() }
                }
                div { class: "navbar__desktop",
                    AuthSection { auth, model: vm.auth.clone() }
                }

                div { class: "navbar__mobile",
                    SheetTrigger { open, on_toggle: toggle }
                    Sheet {
                        open,
                        on_open_change: set_open,
                        title: t!("sheet-title"),
                        description: t!("sheet-description"),
                        div { class: "sheet__stack",
                            NavLinks {
                                items: vm.items.clone(),
                                mobile: true,
                                on_follow: follow_mobile,
                            }
                            div { class: "sheet__divider" }
                            AuthSection { auth, model: vm.auth.clone(), mobile: true }
                        }
                    }
                }
            }
        }
    }
}
