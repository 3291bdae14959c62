use serde::{Deserialize, Serialize};

/// Signed-in actor information handed over by the authentication layer.
///
/// The role is kept as the raw session value; navigation decides how to
/// interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    subject: String,
    role: String,
}

impl SessionIdentity {
    /// Creates a session identity from authentication data.
    #[must_use]
    pub fn new(subject: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
        }
    }

    /// Returns the stable subject claim.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the raw role value stored in the session.
    #[must_use]
    pub fn role(&self) -> &str {
        self.role.as_str()
    }
}
