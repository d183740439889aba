use dioxus::prelude::*;

use crate::auth::AuthHandle;
use crate::components::LandingView;

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthHandle>();
    rsx! {
        LandingView { auth }
    }
}
