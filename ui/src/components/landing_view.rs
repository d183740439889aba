use dioxus::prelude::*;

use crate::auth::AuthHandle;
use crate::components::{ModeToggle, SignInButton, SignUpButton, UserButton};
use crate::t;

/// Landing page: auth controls and theme toggle in a header, then the
/// greeting. Stateless; everything comes from `auth`.
#[component]
pub fn LandingView(auth: AuthHandle) -> Element {
    let signed_in = auth.is_signed_in();

    rsx! {
        section { class: "page page-landing",
            header { class: "page-landing__header",
                if signed_in {
                    UserButton { auth }
                } else {
                    SignInButton { auth, class: "button button--primary", {t!("auth-sign-in")} }
                    SignUpButton { auth, class: "button button--primary", {t!("auth-sign-up")} }
                }
                ModeToggle {}
            }
            h1 { class: "page-landing__greeting", {t!("landing-greeting")} }
        }
    }
}
