use dioxus::prelude::*;

use crate::core::Glyph;

/// Inline stroke icon. Decorative only; pair it with visible text or an
/// `aria-label` on the surrounding control.
#[component]
pub fn Icon(glyph: Glyph, #[props(into, default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            "data-glyph": glyph.name(),
            "aria-hidden": "true",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            for d in glyph.paths() {
                path { d: *d }
            }
        }
    }
}
