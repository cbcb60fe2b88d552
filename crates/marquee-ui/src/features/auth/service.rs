//! Mock identity provider.
//!
//! # Design
//! - No credentials are checked; the outcome comes from an injected roll in
//!   `[0, 1)` so tests can force success or failure.
//! - Latency is not simulated here; the browser flow waits before calling in.

use crate::core::auth::{AuthProvider, UserPreferences, UserProfile};
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Simulated delay before a provider sign-in resolves.
pub const SIGN_IN_DELAY_MS: u32 = 1_500;
/// Simulated delay before account creation resolves.
pub const CREATE_ACCOUNT_DELAY_MS: u32 = 2_000;

const SIGN_IN_FAILURE_RATE: f64 = 0.1;
const CREATE_ACCOUNT_FAILURE_RATE: f64 = 0.05;

/// Mock service rejection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The provider declined; carries the user-facing message.
    #[error("{message}")]
    Rejected {
        /// Message shown on the sign-in page.
        message: String,
    },
}

impl AuthError {
    fn rejected(message: &str) -> Self {
        Self::Rejected {
            message: message.to_string(),
        }
    }
}

/// Optional identity details supplied by the provider button or form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInInput {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Avatar URL.
    pub avatar_url: Option<String>,
}

/// Sign-up form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

/// Mock sign-in backend.
#[derive(Clone)]
pub struct MockAuthService<R> {
    roll: R,
}

impl<R: Fn() -> f64> MockAuthService<R> {
    /// Build a service drawing outcomes from `roll`.
    #[must_use]
    pub const fn new(roll: R) -> Self {
        Self { roll }
    }

    /// Sign in through `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] for the simulated failure share of attempts.
    pub fn sign_in_with_provider(
        &self,
        provider: AuthProvider,
        input: &SignInInput,
        now: DateTime<Utc>,
    ) -> Result<UserProfile, AuthError> {
        if (self.roll)() <= SIGN_IN_FAILURE_RATE {
            return Err(AuthError::rejected(
                "Authentication failed. Please try again.",
            ));
        }
        Ok(build_profile(
            provider,
            non_blank(input.name.as_deref()).unwrap_or("John Doe"),
            non_blank(input.email.as_deref()).unwrap_or("john@example.com"),
            non_blank(input.avatar_url.as_deref()),
            now,
        ))
    }

    /// Create a new account. Password confirmation is checked by the flow.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] for the simulated failure share of attempts.
    pub fn create_account(
        &self,
        account: &NewAccount,
        now: DateTime<Utc>,
    ) -> Result<UserProfile, AuthError> {
        if (self.roll)() <= CREATE_ACCOUNT_FAILURE_RATE {
            return Err(AuthError::rejected(
                "Account creation failed. Please try again.",
            ));
        }
        Ok(build_profile(
            AuthProvider::Imdb,
            non_blank(Some(account.name.as_str())).unwrap_or("New User"),
            non_blank(Some(account.email.as_str())).unwrap_or("newuser@example.com"),
            None,
            now,
        ))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn build_profile(
    provider: AuthProvider,
    name: &str,
    email: &str,
    avatar_url: Option<&str>,
    now: DateTime<Utc>,
) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4().simple().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar_url: avatar_url.map_or_else(|| generated_avatar(name), str::to_string),
        provider,
        join_date: now,
        preferences: UserPreferences::default(),
    }
}

/// Initials avatar for `name`.
#[must_use]
pub fn generated_avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=f59e0b&color=000000",
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_sign_in_fills_defaults() {
        let service = MockAuthService::new(|| 0.5);
        let user = service
            .sign_in_with_provider(AuthProvider::Google, &SignInInput::default(), Utc::now())
            .expect("roll above threshold succeeds");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.provider, AuthProvider::Google);
        assert_eq!(
            user.avatar_url,
            "https://ui-avatars.com/api/?name=John%20Doe&background=f59e0b&color=000000"
        );
        assert_eq!(user.preferences, UserPreferences::default());
        assert!(!user.id.is_empty());
    }

    #[test]
    fn provider_sign_in_keeps_supplied_details() {
        let service = MockAuthService::new(|| 0.99);
        let input = SignInInput {
            name: Some("Grace".to_string()),
            email: Some("grace@example.com".to_string()),
            avatar_url: Some("https://img.test/grace.png".to_string()),
        };
        let user = service
            .sign_in_with_provider(AuthProvider::Apple, &input, Utc::now())
            .expect("success");
        assert_eq!(user.name, "Grace");
        assert_eq!(user.avatar_url, "https://img.test/grace.png");
    }

    #[test]
    fn low_roll_rejects_sign_in() {
        let service = MockAuthService::new(|| 0.1);
        let err = service
            .sign_in_with_provider(AuthProvider::Imdb, &SignInInput::default(), Utc::now())
            .expect_err("roll at threshold fails");
        assert_eq!(err.to_string(), "Authentication failed. Please try again.");
    }

    #[test]
    fn account_creation_uses_imdb_and_defaults() {
        let service = MockAuthService::new(|| 0.06);
        let user = service
            .create_account(&NewAccount::default(), Utc::now())
            .expect("above creation threshold");
        assert_eq!(user.provider, AuthProvider::Imdb);
        assert_eq!(user.name, "New User");
        assert_eq!(user.email, "newuser@example.com");
    }

    #[test]
    fn low_roll_rejects_account_creation() {
        let service = MockAuthService::new(|| 0.01);
        let err = service
            .create_account(&NewAccount::default(), Utc::now())
            .expect_err("below threshold fails");
        assert_eq!(err.to_string(), "Account creation failed. Please try again.");
    }

    #[test]
    fn ids_are_unique() {
        let service = MockAuthService::new(|| 0.5);
        let now = Utc::now();
        let a = service
            .sign_in_with_provider(AuthProvider::Email, &SignInInput::default(), now)
            .expect("a");
        let b = service
            .sign_in_with_provider(AuthProvider::Email, &SignInInput::default(), now)
            .expect("b");
        assert_ne!(a.id, b.id);
    }
}
