//! Theme switch and the root element that applies it.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::Icon;
use crate::core::Theme;
use crate::t;

/// Current colour scheme. In-memory only.
pub static THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Wraps the app so CSS can key off `data-theme`.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": theme.css_value(),
            {children}
        }
    }
}

/// Cycles Light -> Dark -> System.
#[component]
pub fn ModeToggle() -> Element {
    let theme = *THEME.read();
    let title = match theme {
        Theme::Light => t!("theme-light"),
        Theme::Dark => t!("theme-dark"),
        Theme::System => t!("theme-system"),
    };

    rsx! {
        button {
            class: "button button--ghost mode-toggle",
            r#type: "button",
            title: "{title}",
            "aria-label": t!("theme-toggle-label"),
            onclick: move |_| {
                let next = THEME.read().next();
                debug!(theme = next.css_value(), "theme changed");
                *THEME.write() = next;
            },
            Icon { glyph: theme.glyph() }
        }
    }
}
