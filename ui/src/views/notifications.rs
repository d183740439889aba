use dioxus::prelude::*;

use crate::auth::AuthHandle;
use crate::t;

#[component]
pub fn Notifications() -> Element {
    let auth = use_context::<AuthHandle>();

    rsx! {
        section { class: "page page-notifications",
            h1 { {t!("page-notifications-title")} }
            if auth.is_signed_in() {
                p { class: "page__empty", {t!("page-notifications-empty")} }
            } else {
                p { class: "page__signed-out", {t!("page-signed-out")} }
            }
        }
    }
}
