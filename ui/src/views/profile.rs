use dioxus::prelude::*;

use crate::auth::AuthHandle;
use crate::t;

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthHandle>();
    let state = auth.state();

    rsx! {
        section { class: "page page-profile",
            h1 { {t!("page-profile-title")} }
            if let Some(user) = state.user() {
                p { class: "page-profile__name",
                    {t!("page-profile-greeting", name = user.display_name())}
                }
            } else {
                p { class: "page__signed-out", {t!("page-signed-out")} }
            }
        }
    }
}
