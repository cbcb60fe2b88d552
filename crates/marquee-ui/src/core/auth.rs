//! Authentication state container.
//!
//! # Design
//! - The session is a plain value mutated only by [`reduce`]; persistence is
//!   described by the returned [`Effect`]s and carried out by the store.
//! - Transitions are accepted from any state; the visible status is derived
//!   from the session fields.

use crate::core::store::Effect;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity provider a user signed in with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Email and password.
    Email,
    /// IMDb account.
    Imdb,
    /// Amazon account.
    Amazon,
    /// Google account.
    Google,
    /// Apple account.
    Apple,
}

impl AuthProvider {
    /// Providers offered on the sign-in page, in display order.
    pub const ALL: [Self; 5] = [
        Self::Imdb,
        Self::Amazon,
        Self::Google,
        Self::Apple,
        Self::Email,
    ];

    /// Human readable provider name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Imdb => "IMDb",
            Self::Amazon => "Amazon",
            Self::Google => "Google",
            Self::Apple => "Apple",
        }
    }
}

/// Per-user display preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Theme name.
    pub theme: String,
    /// Whether notifications are enabled.
    pub notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            notifications: true,
        }
    }
}

/// Signed-in user as held in memory and persisted under the user key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Opaque user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar image URL.
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    /// Provider used to sign in.
    pub provider: AuthProvider,
    /// Account creation time.
    pub join_date: DateTime<Utc>,
    /// Display preferences.
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// Partial update merged into the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement avatar URL.
    pub avatar_url: Option<String>,
    /// Replacement preferences.
    pub preferences: Option<UserPreferences>,
}

impl UserPatch {
    fn apply(self, user: &mut UserProfile) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(avatar_url) = self.avatar_url {
            user.avatar_url = avatar_url;
        }
        if let Some(preferences) = self.preferences {
            user.preferences = preferences;
        }
    }
}

/// In-memory authentication session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Signed-in user, if any.
    pub user: Option<UserProfile>,
    /// Whether the session is authenticated.
    pub is_authenticated: bool,
    /// Whether a sign-in attempt is in flight.
    pub loading: bool,
    /// Last sign-in failure message.
    pub error: Option<String>,
}

/// Derived authentication status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// No user and no failure.
    Anonymous,
    /// Sign-in in flight.
    Authenticating,
    /// User present.
    Authenticated,
    /// Last sign-in attempt failed.
    Failed,
}

impl Session {
    /// Session seeded from a persisted user snapshot.
    #[must_use]
    pub fn from_snapshot(user: Option<UserProfile>) -> Self {
        Self {
            is_authenticated: user.is_some(),
            user,
            loading: false,
            error: None,
        }
    }

    /// Current status derived from the session fields.
    #[must_use]
    pub const fn status(&self) -> AuthStatus {
        if self.loading {
            AuthStatus::Authenticating
        } else if self.is_authenticated && self.user.is_some() {
            AuthStatus::Authenticated
        } else if self.error.is_some() {
            AuthStatus::Failed
        } else {
            AuthStatus::Anonymous
        }
    }
}

/// Authentication transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// A sign-in attempt started.
    LoginStart,
    /// Sign-in succeeded with the given user.
    LoginSuccess(UserProfile),
    /// Sign-in failed with a user-facing message.
    LoginFailure(String),
    /// The user signed out.
    Logout,
    /// Dismiss the current error.
    ClearError,
    /// Merge profile changes into the signed-in user.
    UpdateUser(UserPatch),
}

/// Apply `action` to `session`, returning the persistence effects it implies.
pub fn reduce(session: &mut Session, action: AuthAction) -> Vec<Effect> {
    match action {
        AuthAction::LoginStart => {
            session.loading = true;
            session.error = None;
            Vec::new()
        }
        AuthAction::LoginSuccess(user) => {
            *session = Session::from_snapshot(Some(user));
            vec![Effect::SaveUser]
        }
        AuthAction::LoginFailure(message) => {
            *session = Session {
                error: Some(message),
                ..Session::default()
            };
            vec![Effect::RemoveUser]
        }
        AuthAction::Logout => {
            *session = Session::default();
            vec![
                Effect::RemoveUser,
                Effect::RemoveWatchlist,
                Effect::RemoveRatings,
            ]
        }
        AuthAction::ClearError => {
            session.error = None;
            Vec::new()
        }
        AuthAction::UpdateUser(patch) => match session.user.as_mut() {
            Some(user) => {
                patch.apply(user);
                vec![Effect::SaveUser]
            }
            None => {
                tracing::warn!("profile update ignored without a signed-in user");
                Vec::new()
            }
        },
    }
}

/// Signed-in user.
#[must_use]
pub const fn select_user(session: &Session) -> Option<&UserProfile> {
    session.user.as_ref()
}

/// Whether a user is signed in.
#[must_use]
pub const fn select_is_authenticated(session: &Session) -> bool {
    session.is_authenticated
}

/// Whether a sign-in attempt is in flight.
#[must_use]
pub const fn select_auth_loading(session: &Session) -> bool {
    session.loading
}

/// Last sign-in failure message.
#[must_use]
pub fn select_auth_error(session: &Session) -> Option<&str> {
    session.error.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar_url: "https://img.test/ada.png".to_string(),
            provider: AuthProvider::Google,
            join_date: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            preferences: UserPreferences::default(),
        }
    }

    #[test]
    fn login_start_sets_loading_and_clears_error() {
        let mut session = Session {
            error: Some("old".to_string()),
            ..Session::default()
        };
        let effects = reduce(&mut session, AuthAction::LoginStart);
        assert!(effects.is_empty());
        assert_eq!(session.status(), AuthStatus::Authenticating);
        assert!(select_auth_error(&session).is_none());
    }

    #[test]
    fn login_success_authenticates_and_persists() {
        let mut session = Session::default();
        reduce(&mut session, AuthAction::LoginStart);
        let effects = reduce(&mut session, AuthAction::LoginSuccess(user()));
        assert_eq!(effects, vec![Effect::SaveUser]);
        assert_eq!(session.status(), AuthStatus::Authenticated);
        assert!(select_is_authenticated(&session));
        assert!(!select_auth_loading(&session));
        assert_eq!(select_user(&session).map(|u| u.name.as_str()), Some("Ada"));
    }

    #[test]
    fn login_failure_while_anonymous_records_message() {
        let mut session = Session::default();
        let effects = reduce(
            &mut session,
            AuthAction::LoginFailure("Passwords do not match".to_string()),
        );
        assert_eq!(effects, vec![Effect::RemoveUser]);
        assert!(session.user.is_none());
        assert!(!session.is_authenticated);
        assert_eq!(select_auth_error(&session), Some("Passwords do not match"));
        assert_eq!(session.status(), AuthStatus::Failed);
    }

    #[test]
    fn login_failure_drops_existing_user() {
        let mut session = Session::from_snapshot(Some(user()));
        reduce(&mut session, AuthAction::LoginFailure("nope".to_string()));
        assert!(select_user(&session).is_none());
        assert!(!select_is_authenticated(&session));
    }

    #[test]
    fn logout_resets_and_clears_every_key() {
        let mut session = Session::from_snapshot(Some(user()));
        let effects = reduce(&mut session, AuthAction::Logout);
        assert_eq!(session, Session::default());
        assert_eq!(
            effects,
            vec![
                Effect::RemoveUser,
                Effect::RemoveWatchlist,
                Effect::RemoveRatings
            ]
        );
    }

    #[test]
    fn clear_error_keeps_everything_else() {
        let mut session = Session::default();
        reduce(&mut session, AuthAction::LoginFailure("bad".to_string()));
        reduce(&mut session, AuthAction::ClearError);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn update_user_merges_patch() {
        let mut session = Session::from_snapshot(Some(user()));
        let effects = reduce(
            &mut session,
            AuthAction::UpdateUser(UserPatch {
                name: Some("Ada L.".to_string()),
                ..UserPatch::default()
            }),
        );
        assert_eq!(effects, vec![Effect::SaveUser]);
        let updated = select_user(&session).expect("user kept");
        assert_eq!(updated.name, "Ada L.");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[test]
    fn update_user_without_user_is_noop() {
        let mut session = Session::default();
        let effects = reduce(
            &mut session,
            AuthAction::UpdateUser(UserPatch {
                email: Some("x@example.com".to_string()),
                ..UserPatch::default()
            }),
        );
        assert!(effects.is_empty());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn profile_uses_stored_field_names() {
        let json = serde_json::to_value(user()).expect("encode");
        assert_eq!(json["avatar"], "https://img.test/ada.png");
        assert_eq!(json["provider"], "google");
        assert!(json.get("joinDate").is_some());
        assert_eq!(json["preferences"]["theme"], "dark");
    }

    #[test]
    fn profile_decodes_browser_iso_timestamps() {
        let raw = r#"{"id":"x","name":"N","email":"e","avatar":"a","provider":"imdb","joinDate":"2024-05-01T10:20:30.123Z"}"#;
        let profile: UserProfile = serde_json::from_str(raw).expect("decode");
        assert_eq!(profile.provider, AuthProvider::Imdb);
        assert_eq!(profile.preferences, UserPreferences::default());
    }
}
