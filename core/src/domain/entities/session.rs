//! Session entity representing the identity persisted for the current client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Represents the kind of account behind a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A freelancer bidding on projects.
    ///
    /// Also the effective role of anonymous visitors, so role-dependent
    /// views always have something to render. It grants nothing: the
    /// route guard still requires a session.
    #[default]
    Freelancer,
    /// A company posting projects
    Company,
}

impl Role {
    /// The string stored under the role key
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Freelancer => "freelancer",
            Role::Company => "company",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "freelancer" => Ok(Role::Freelancer),
            "company" => Ok(Role::Company),
            other => Err(ValidationError::UnknownRole {
                value: other.to_string(),
            }),
        }
    }
}

/// The persisted identity of the current client.
///
/// Token, role and user id exist together or not at all; there is no way
/// to build a `Session` with a missing or blank field.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    role: Role,
    user_id: String,
}

impl Session {
    /// Creates a session, rejecting blank token or user id
    pub fn new(
        token: impl Into<String>,
        role: Role,
        user_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let token = token.into();
        let user_id = user_id.into();

        if token.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "token".to_string(),
            });
        }
        if user_id.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "user_id".to_string(),
            });
        }

        Ok(Self {
            token,
            role,
            user_id,
        })
    }

    /// Builds a session from raw stored values.
    ///
    /// Returns `None` unless all three values are present, non-blank, and
    /// the role is one of the known roles.
    pub fn from_parts(
        token: Option<String>,
        role: Option<String>,
        user_id: Option<String>,
    ) -> Option<Self> {
        let role = role?.parse::<Role>().ok()?;
        Self::new(token?, role, user_id?).ok()
    }

    /// Opaque bearer credential
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Account kind
    pub fn role(&self) -> Role {
        self.role
    }

    /// Identifier of the role-specific profile document
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Checks if the session belongs to a company account
    pub fn is_company(&self) -> bool {
        self.role == Role::Company
    }

    /// Checks if the session belongs to a freelancer account
    pub fn is_freelancer(&self) -> bool {
        self.role == Role::Freelancer
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Read-only view of the session exposed to navigation code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedIdentity {
    /// Whether a complete session is present
    pub is_logged_in: bool,

    /// Effective role, `Freelancer` for anonymous visitors
    pub role: Role,

    /// Profile id of the logged-in user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl DerivedIdentity {
    /// Identity of a visitor without a session
    pub fn anonymous() -> Self {
        Self {
            is_logged_in: false,
            role: Role::default(),
            user_id: None,
        }
    }

    /// Derives the identity from an optional session
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self {
                is_logged_in: true,
                role: session.role(),
                user_id: Some(session.user_id().to_string()),
            },
            None => Self::anonymous(),
        }
    }

    /// Checks if the identity is a logged-in company account
    pub fn is_company_role(&self) -> bool {
        self.is_logged_in && self.role == Role::Company
    }
}

impl Default for DerivedIdentity {
    fn default() -> Self {
        Self::anonymous()
    }
}
