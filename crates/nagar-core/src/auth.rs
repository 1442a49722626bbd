//! Session identity as seen by the chat core.
//!
//! Sign-in and sign-up live in an external identity service. The chat only
//! needs to know whether someone is signed in, and who.

use serde::{Deserialize, Serialize};

/// The signed-in user of a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email,
        }
    }

    /// Name shown in records: the local part of the email, or "User".
    pub fn display_name(&self) -> &str {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }
}

/// Read-once view of the external session.
pub trait AuthContext: Send + Sync {
    /// The current identity, or `None` for anonymous sessions.
    fn identity(&self) -> Option<Identity>;

    fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }
}

/// Always anonymous.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuth;

impl AuthContext for AnonymousAuth {
    fn identity(&self) -> Option<Identity> {
        None
    }
}

/// A fixed identity, resolved once at startup.
#[derive(Debug, Clone)]
pub struct StaticAuthContext {
    identity: Option<Identity>,
}

impl StaticAuthContext {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    pub fn signed_in(user_id: impl Into<String>, email: Option<String>) -> Self {
        Self::new(Some(Identity::new(user_id, email)))
    }
}

impl AuthContext for StaticAuthContext {
    fn identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_email() {
        let identity = Identity::new("u-1", Some("asha.verma@example.in".into()));
        assert_eq!(identity.display_name(), "asha.verma");
        assert_eq!(Identity::new("u-2", None).display_name(), "User");
        assert_eq!(
            Identity::new("u-3", Some("@nowhere".into())).display_name(),
            "User"
        );
    }

    #[test]
    fn test_auth_contexts() {
        assert!(!AnonymousAuth.is_authenticated());
        assert!(StaticAuthContext::signed_in("u-1", None).is_authenticated());
    }
}
