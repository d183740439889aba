//! Controls owned by the auth provider: modal triggers, the account menu
//! and the modal itself. Views only place them.

use dioxus::prelude::*;

use crate::auth::AuthHandle;
use crate::components::{Icon, ModeToggle};
use crate::core::{AuthError, AuthForm, AuthModalKind, AuthSectionModel, Glyph};
use crate::t;

/// Opens the sign-in modal.
#[component]
pub fn SignInButton(
    auth: AuthHandle,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "data-auth": "sign-in",
            onclick: move |_| auth.open_sign_in(),
            {children}
        }
    }
}

/// Opens the sign-up modal.
#[component]
pub fn SignUpButton(
    auth: AuthHandle,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "data-auth": "sign-up",
            onclick: move |_| auth.open_sign_up(),
            {children}
        }
    }
}

/// Avatar with a dropdown holding the display name and "Sign out".
/// Renders nothing while signed out.
#[component]
pub fn UserButton(auth: AuthHandle) -> Element {
    let mut menu_open = use_signal(|| false);

    let state = auth.state();
    let Some(user) = state.user() else {
        return rsx! {};
    };
    let initial = user.initial();
    let name = user.display_name().to_owned();
    let expanded = if menu_open() { "true" } else { "false" };

    rsx! {
        div { class: "user-button", "data-auth": "account-menu",
            button {
                class: "user-button__avatar",
                r#type: "button",
                "aria-haspopup": "menu",
                "aria-expanded": expanded,
                "aria-label": t!("auth-account-menu-label"),
                onclick: move |_| {
                    let open = menu_open();
                    menu_open.set(!open);
                },
                "{initial}"
            }
            if menu_open() {
                div { class: "user-button__popover", "role": "menu",
                    p { class: "user-button__name", "{name}" }
                    button {
                        class: "user-button__action",
                        r#type: "button",
                        "role": "menuitem",
                        onclick: move |_| {
                            menu_open.set(false);
                            auth.sign_out();
                        },
                        {t!("auth-sign-out")}
                    }
                }
            }
        }
    }
}

/// Theme toggle plus either the account menu or a sign-in trigger.
///
/// The mobile variant also prints the display name next to the avatar.
#[component]
pub fn AuthSection(
    auth: AuthHandle,
    model: AuthSectionModel,
    #[props(default)] mobile: bool,
) -> Element {
    let class = if mobile {
        "auth-section auth-section--mobile"
    } else {
        "auth-section"
    };

    rsx! {
        div { class,
            ModeToggle {}
            match model {
                AuthSectionModel::SignedIn { display_name, .. } => rsx! {
                    div { class: "auth-section__account",
                        UserButton { auth }
                        if mobile {
                            span { class: "auth-section__name", "{display_name}" }
                        }
                    }
                },
                AuthSectionModel::SignedOut => rsx! {
                    SignInButton { auth, class: "button button--outline auth-section__sign-in",
                        Icon { glyph: Glyph::LogIn }
                        span { {t!("auth-sign-in-nav")} }
                    }
                },
            }
        }
    }
}

fn error_text(err: &AuthError) -> String {
    match err {
        AuthError::MissingIdentity => t!("auth-error-missing-identity"),
        AuthError::InvalidUsername { .. } => t!("auth-error-invalid-username"),
    }
}

/// The provider's sign-in / sign-up dialog. Mount once near the root; it
/// stays empty until a trigger opens it.
#[component]
pub fn AuthModal(auth: AuthHandle) -> Element {
    let mut first_name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<AuthError>);

    let Some(kind) = auth.pending_modal() else {
        return rsx! {};
    };

    let (title, submit_label) = match kind {
        AuthModalKind::SignIn => (t!("auth-modal-sign-in-title"), t!("auth-submit-sign-in")),
        AuthModalKind::SignUp => (t!("auth-modal-sign-up-title"), t!("auth-submit-sign-up")),
    };

    let mut reset = move || {
        first_name.set(String::new());
        username.set(String::new());
        error.set(None);
    };

    rsx! {
        div { class: "auth-modal", "role": "dialog", "aria-modal": "true",
            div {
                class: "auth-modal__overlay",
                onclick: move |_| {
                    reset();
                    auth.close_modal();
                },
            }
            div { class: "auth-modal__card",
                h2 { class: "auth-modal__title", "{title}" }
                label { class: "auth-modal__field",
                    span { {t!("auth-field-first-name")} }
                    input {
                        r#type: "text",
                        autocomplete: "given-name",
                        value: "{first_name}",
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                }
                label { class: "auth-modal__field",
                    span { {t!("auth-field-username")} }
                    input {
                        r#type: "text",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                if let Some(err) = error() {
                    p { class: "auth-modal__error", "role": "alert", {error_text(&err)} }
                }
                div { class: "auth-modal__actions",
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| {
                            reset();
                            auth.close_modal();
                        },
                        {t!("auth-cancel")}
                    }
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| {
                            let form = AuthForm {
                                first_name: first_name(),
                                username: username(),
                            };
                            match auth.complete(kind, form) {
                                Ok(_) => reset(),
                                Err(err) => error.set(Some(err)),
                            }
                        },
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
