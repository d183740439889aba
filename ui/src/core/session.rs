//! Session snapshot exposed by the auth provider, plus the provider's own
//! form validation for the sign-in / sign-up modal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label shown when a user has neither a first name nor a username.
pub const FALLBACK_DISPLAY_NAME: &str = "User";

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 32;

/// Current-user descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    pub fn with_first_name(name: impl Into<String>) -> Self {
        Self {
            first_name: Some(name.into()),
            username: None,
        }
    }

    pub fn with_username(name: impl Into<String>) -> Self {
        Self {
            first_name: None,
            username: Some(name.into()),
        }
    }

    /// First name, else username, else [`FALLBACK_DISPLAY_NAME`]. Blank
    /// values count as missing so the label is never empty.
    pub fn display_name(&self) -> &str {
        non_blank(self.first_name.as_deref())
            .or_else(|| non_blank(self.username.as_deref()))
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }

    /// Uppercased first character of the display name, for the avatar.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Authentication snapshot for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Which modal flow the provider is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthModalKind {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("enter a first name or a username")]
    MissingIdentity,
    #[error("usernames are {min}-{max} characters of letters, digits, '.', '-' or '_'")]
    InvalidUsername { min: usize, max: usize },
}

/// Raw field values from the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub first_name: String,
    pub username: String,
}

impl AuthForm {
    /// Validate the form for `kind` and build the resulting user.
    pub fn into_user(self, kind: AuthModalKind) -> Result<User, AuthError> {
        let first_name = non_blank(Some(&self.first_name)).map(str::to_owned);
        let username = non_blank(Some(&self.username)).map(str::to_owned);

        match kind {
            AuthModalKind::SignIn => {
                if first_name.is_none() && username.is_none() {
                    return Err(AuthError::MissingIdentity);
                }
                if let Some(name) = username.as_deref() {
                    validate_username(name)?;
                }
            }
            AuthModalKind::SignUp => {
                let name = username.as_deref().ok_or(AuthError::InvalidUsername {
                    min: USERNAME_MIN,
                    max: USERNAME_MAX,
                })?;
                validate_username(name)?;
            }
        }

        Ok(User {
            first_name,
            username,
        })
    }
}

fn validate_username(name: &str) -> Result<(), AuthError> {
    let len = name.chars().count();
    let charset_ok = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if (USERNAME_MIN..=USERNAME_MAX).contains(&len) && charset_ok {
        Ok(())
    } else {
        Err(AuthError::InvalidUsername {
            min: USERNAME_MIN,
            max: USERNAME_MAX,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_fallback_chain() {
        assert_eq!(User::with_first_name("Ann").display_name(), "Ann");
        assert_eq!(User::with_username("ann99").display_name(), "ann99");
        assert_eq!(User::default().display_name(), "User");
    }

    #[test]
    fn first_name_wins_over_username() {
        let user = User {
            first_name: Some("Ann".into()),
            username: Some("ann99".into()),
        };
        assert_eq!(user.display_name(), "Ann");
    }

    #[test]
    fn blank_names_fall_through() {
        let user = User {
            first_name: Some("   ".into()),
            username: Some(String::new()),
        };
        assert_eq!(user.display_name(), FALLBACK_DISPLAY_NAME);
        assert_eq!(user.initial(), "U");
    }

    #[test]
    fn descriptor_uses_camel_case_fields() {
        let user: User = serde_json::from_str(r#"{"firstName":"Ann"}"#).unwrap();
        assert_eq!(user, User::with_first_name("Ann"));

        let empty: User = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.display_name(), "User");

        let json = serde_json::to_string(&User::with_username("ann99")).unwrap();
        assert_eq!(json, r#"{"username":"ann99"}"#);
    }

    #[test]
    fn sign_in_needs_some_identity() {
        let err = AuthForm::default().into_user(AuthModalKind::SignIn).unwrap_err();
        assert_eq!(err, AuthError::MissingIdentity);

        let user = AuthForm {
            first_name: " Ann ".into(),
            username: String::new(),
        }
        .into_user(AuthModalKind::SignIn)
        .unwrap();
        assert_eq!(user, User::with_first_name("Ann"));
    }

    #[test]
    fn sign_up_requires_valid_username() {
        let only_name = AuthForm {
            first_name: "Ann".into(),
            username: String::new(),
        };
        assert!(matches!(
            only_name.into_user(AuthModalKind::SignUp),
            Err(AuthError::InvalidUsername { .. })
        ));

        let too_long = "x".repeat(33);
        for bad in ["ab", "has space", "émile", too_long.as_str()] {
            let form = AuthForm {
                first_name: String::new(),
                username: bad.to_string(),
            };
            assert!(form.into_user(AuthModalKind::SignUp).is_err(), "{bad} accepted");
        }

        let ok = AuthForm {
            first_name: String::new(),
            username: "ann_99.x-y".into(),
        };
        assert_eq!(
            ok.into_user(AuthModalKind::SignUp).unwrap().display_name(),
            "ann_99.x-y"
        );
    }

    #[test]
    fn signed_in_follows_user_presence() {
        assert!(!AuthState::signed_out().is_signed_in());
        assert!(AuthState::signed_in(User::default()).is_signed_in());
    }
}
