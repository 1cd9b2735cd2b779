#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Scolaris authentication API.
//!
//! The front end encodes [`LoginRequest`] and decodes [`LoginResponse`] from
//! these types so the wire contract has a single definition. Role tags stay
//! strings on the wire; [`UserRole`] is the typed view used for routing.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Failure message the backend sends when the account must rotate its password.
///
/// Newer backends also set [`LoginStatusCode::PasswordChangeRequired`]; the
/// message comparison only covers servers that predate the `code` field.
pub const PASSWORD_CHANGE_REQUIRED_MESSAGE: &str = "Changement de mot de passe requis";

/// Credentials posted to the login endpoint.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email-shaped account identifier.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Machine-readable status attached to a login response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LoginStatusCode {
    /// Credentials were accepted.
    Ok,
    /// Identifier or password did not match.
    InvalidCredentials,
    /// The account exists but cannot sign in.
    AccountDisabled,
    /// The account must set a new password before continuing.
    PasswordChangeRequired,
    /// A code this client does not know about.
    #[serde(other)]
    Other,
}

/// Body returned by the login endpoint, regardless of HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// Human-readable message, usually present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable status tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<LoginStatusCode>,
    /// Bearer token issued on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Authenticated user record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl LoginResponse {
    /// Whether this failure asks the user to change their password first.
    #[must_use]
    pub fn requires_password_change(&self) -> bool {
        !self.success
            && (self.code == Some(LoginStatusCode::PasswordChangeRequired)
                || self.message.as_deref() == Some(PASSWORD_CHANGE_REQUIRED_MESSAGE))
    }
}

/// User record attached to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserProfile {
    /// Backend identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role tag (`etudiant`, `enseignant`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Role tag when present and non-blank.
    #[must_use]
    pub fn role_tag(&self) -> Option<&str> {
        self.role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
    }

    /// Typed role, if the tag is one this client knows.
    #[must_use]
    pub fn known_role(&self) -> Option<UserRole> {
        self.role_tag().and_then(UserRole::from_tag)
    }

    /// Best display name available: `prenom nom`, then the email.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let field = |key: &str| {
            self.extra
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };
        match (field("prenom"), field("nom")) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => self.email.clone(),
        }
    }
}

/// Account categories the application routes on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Enrolled student.
    #[serde(rename = "etudiant")]
    Student,
    /// Teaching staff.
    #[serde(rename = "enseignant")]
    Teacher,
    /// Head of department.
    #[serde(rename = "directeur_departement")]
    DepartmentDirector,
    /// Administrative staff.
    #[serde(rename = "administratif")]
    Administrative,
}

impl UserRole {
    /// Every role in routing-table order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Student,
            Self::Teacher,
            Self::DepartmentDirector,
            Self::Administrative,
        ]
    }

    /// Wire tag for the role.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Student => "etudiant",
            Self::Teacher => "enseignant",
            Self::DepartmentDirector => "directeur_departement",
            Self::Administrative => "administratif",
        }
    }

    /// Parse a wire tag. Matching is exact; unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().into_iter().find(|role| role.as_tag() == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_decodes_success_with_extra_user_fields() {
        let body = json!({
            "success": true,
            "token": "abc",
            "user": {
                "id": "42",
                "email": "amira@univ.tn",
                "role": "enseignant",
                "prenom": "Amira",
                "nom": "Ben Salah",
                "departement": "Informatique"
            }
        });
        let response: LoginResponse = serde_json::from_value(body).expect("decode");
        assert!(response.success);
        assert_eq!(response.token.as_deref(), Some("abc"));
        let user = response.user.expect("user");
        assert_eq!(user.known_role(), Some(UserRole::Teacher));
        assert_eq!(user.display_name().as_deref(), Some("Amira Ben Salah"));
        assert_eq!(
            user.extra.get("departement"),
            Some(&json!("Informatique"))
        );
    }

    #[test]
    fn unknown_status_code_maps_to_other() {
        let response: LoginResponse =
            serde_json::from_value(json!({"success": false, "code": "rate_limited"}))
                .expect("decode");
        assert_eq!(response.code, Some(LoginStatusCode::Other));
        assert!(response.message.is_none());
        assert!(!response.requires_password_change());
    }

    #[test]
    fn password_change_detected_by_code_or_sentinel_message() {
        let by_code: LoginResponse = serde_json::from_value(
            json!({"success": false, "code": "password_change_required", "message": "Please rotate"}),
        )
        .expect("decode");
        assert!(by_code.requires_password_change());

        let by_message = LoginResponse {
            success: false,
            message: Some(PASSWORD_CHANGE_REQUIRED_MESSAGE.to_string()),
            ..LoginResponse::default()
        };
        assert!(by_message.requires_password_change());

        let near_miss = LoginResponse {
            success: false,
            message: Some("changement de mot de passe requis".to_string()),
            ..LoginResponse::default()
        };
        assert!(!near_miss.requires_password_change());
    }

    #[test]
    fn role_tags_are_exact() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_tag(role.as_tag()), Some(role));
        }
        assert_eq!(UserRole::from_tag("Etudiant"), None);
        assert_eq!(UserRole::from_tag("doyen"), None);
    }

    #[test]
    fn blank_role_is_treated_as_missing() {
        let user = UserProfile {
            role: Some("  ".to_string()),
            email: Some("x@univ.tn".to_string()),
            ..UserProfile::default()
        };
        assert_eq!(user.role_tag(), None);
        assert_eq!(user.display_name().as_deref(), Some("x@univ.tn"));
    }

    #[test]
    fn login_request_debug_redacts_password() {
        let request = LoginRequest {
            email: "a@univ.tn".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{request:?}");
        assert!(rendered.contains("a@univ.tn"));
        assert!(!rendered.contains("hunter2"));
        let wire = serde_json::to_value(&request).expect("encode");
        assert_eq!(wire, json!({"email": "a@univ.tn", "password": "hunter2"}));
    }
}
