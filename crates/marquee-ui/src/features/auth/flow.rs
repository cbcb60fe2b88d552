//! Login flows: dispatch start, wait, call the service, dispatch the outcome.

use crate::core::auth::{AuthAction, AuthProvider, UserProfile};
use crate::features::auth::service::{AuthError, MockAuthService, NewAccount, SignInInput};
use chrono::Utc;
use std::future::Future;

/// Fallback message for provider sign-in failures without detail.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback message for account creation failures without detail.
pub const ACCOUNT_CREATION_FAILED: &str = "Account creation failed";
/// Message for a sign-up form whose passwords differ.
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Check a sign-up form before it reaches the service.
///
/// # Errors
///
/// Returns the user-facing message when the passwords differ.
pub fn validate_new_account(account: &NewAccount) -> Result<(), &'static str> {
    if account.password != account.confirm_password {
        return Err(PASSWORDS_DO_NOT_MATCH);
    }
    Ok(())
}

/// Map a service outcome onto the auth transition that records it.
#[must_use]
pub fn outcome_action(outcome: Result<UserProfile, AuthError>, fallback: &str) -> AuthAction {
    match outcome {
        Ok(user) => AuthAction::LoginSuccess(user),
        Err(AuthError::Rejected { message }) => {
            let message = if message.trim().is_empty() {
                fallback.to_string()
            } else {
                message
            };
            AuthAction::LoginFailure(message)
        }
    }
}

/// Provider sign-in: `LoginStart`, await `latency`, then success or failure.
pub async fn sign_in<R, W, D>(
    service: &MockAuthService<R>,
    provider: AuthProvider,
    input: SignInInput,
    latency: W,
    dispatch: D,
) where
    R: Fn() -> f64,
    W: Future<Output = ()>,
    D: Fn(AuthAction),
{
    dispatch(AuthAction::LoginStart);
    latency.await;
    let outcome = service.sign_in_with_provider(provider, &input, Utc::now());
    dispatch(outcome_action(outcome, LOGIN_FAILED));
}

/// Account creation: validate, `LoginStart`, await `latency`, then outcome.
///
/// Mismatched passwords dispatch a failure without calling the service.
pub async fn create_account<R, W, D>(
    service: &MockAuthService<R>,
    account: NewAccount,
    latency: W,
    dispatch: D,
) where
    R: Fn() -> f64,
    W: Future<Output = ()>,
    D: Fn(AuthAction),
{
    if let Err(message) = validate_new_account(&account) {
        dispatch(AuthAction::LoginFailure(message.to_string()));
        return;
    }
    dispatch(AuthAction::LoginStart);
    latency.await;
    let outcome = service.create_account(&account, Utc::now());
    dispatch(outcome_action(outcome, ACCOUNT_CREATION_FAILED));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::future::ready;

    #[test]
    fn empty_rejection_uses_fallback() {
        let action = outcome_action(
            Err(AuthError::Rejected {
                message: "  ".to_string(),
            }),
            LOGIN_FAILED,
        );
        assert_eq!(action, AuthAction::LoginFailure(LOGIN_FAILED.to_string()));
    }

    #[tokio::test]
    async fn sign_in_dispatches_start_then_success() {
        let service = MockAuthService::new(|| 0.9);
        let seen = RefCell::new(Vec::new());
        sign_in(
            &service,
            AuthProvider::Amazon,
            SignInInput::default(),
            ready(()),
            |action| seen.borrow_mut().push(action),
        )
        .await;
        let seen = seen.into_inner();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], AuthAction::LoginStart);
        assert!(matches!(&seen[1], AuthAction::LoginSuccess(user) if user.provider == AuthProvider::Amazon));
    }

    #[tokio::test]
    async fn mismatched_passwords_skip_the_service() {
        let calls = Cell::new(0_u32);
        let service = MockAuthService::new(|| {
            calls.set(calls.get() + 1);
            0.9
        });
        let seen = RefCell::new(Vec::new());
        let account = NewAccount {
            password: "hunter2".to_string(),
            confirm_password: "hunter3".to_string(),
            ..NewAccount::default()
        };
        create_account(&service, account, ready(()), |action| {
            seen.borrow_mut().push(action);
        })
        .await;
        assert_eq!(
            seen.into_inner(),
            vec![AuthAction::LoginFailure(PASSWORDS_DO_NOT_MATCH.to_string())]
        );
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn rejected_account_creation_reports_message() {
        let service = MockAuthService::new(|| 0.0);
        let seen = RefCell::new(Vec::new());
        create_account(&service, NewAccount::default(), ready(()), |action| {
            seen.borrow_mut().push(action);
        })
        .await;
        assert_eq!(
            seen.into_inner().last(),
            Some(&AuthAction::LoginFailure(
                "Account creation failed. Please try again.".to_string()
            ))
        );
    }
}
