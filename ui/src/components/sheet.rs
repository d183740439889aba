//! Slide-out panel used for the mobile menu.
//!
//! Neither piece owns the open state. The parent passes `open` down; the
//! trigger reports clicks and the sheet reports dismissals (overlay or close
//! button) as `on_open_change(false)`.

use dioxus::prelude::*;

use crate::components::Icon;
use crate::core::Glyph;
use crate::t;

/// Menu button for the sheet. Shows a close glyph while open.
#[component]
pub fn SheetTrigger(open: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    let glyph = if open { Glyph::Close } else { Glyph::Menu };
    let expanded = if open { "true" } else { "false" };
    rsx! {
        button {
            class: "button button--ghost sheet__trigger",
            r#type: "button",
            "aria-expanded": expanded,
            "aria-label": t!("nav-menu-label"),
            onclick: move |evt| on_toggle.call(evt),
            Icon { glyph }
        }
    }
}

/// Overlay plus right-hand panel. Renders nothing while closed.
#[component]
pub fn Sheet(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    description: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "sheet", "role": "dialog", "aria-modal": "true",
            div {
                class: "sheet__overlay",
                onclick: move |_| on_open_change.call(false),
            }
            aside { class: "sheet__content sheet__content--right",
                header { class: "sheet__header",
                    h2 { class: "sheet__title", "{title}" }
                    p { class: "sheet__description", "{description}" }
                    button {
                        class: "button button--ghost sheet__close",
                        r#type: "button",
                        "aria-label": t!("sheet-close-label"),
                        onclick: move |_| on_open_change.call(false),
                        Icon { glyph: Glyph::Close }
                    }
                }
                div { class: "sheet__body", {children} }
            }
        }
    }
}
