use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::{Account, AccountId, AccountRole};

/// Authenticated context identifying the acting account.
///
/// Returned by `login` and passed explicitly to every gated operation. The
/// directory keeps at most one active session; a second login replaces it,
/// after which the older handle fails gated operations with
/// `NotAuthenticated`. Sessions are ephemeral and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token tying this handle to the directory's active slot.
    pub token: Uuid,
    pub account_id: AccountId,
    pub email: String,
    pub role: AccountRole,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Open a session for an authenticated account.
    pub fn new(account: &Account) -> Self {
        Self {
            token: Uuid::now_v7(),
            account_id: account.id.clone(),
            email: account.email.clone(),
            role: account.role,
            started_at: Utc::now(),
        }
    }

    /// Whether the session's account carries the admin capability.
    pub fn is_admin(&self) -> bool {
        self.role == AccountRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_snapshot_of_account() {
        let account = Account::new("Sakshi", "sakshi@swapwise.dev", "pw");
        let session = Session::new(&account);
        assert_eq!(session.account_id, account.id);
        assert_eq!(session.email, account.email);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_sessions_have_distinct_tokens() {
        let account = Account::new("Sakshi", "sakshi@swapwise.dev", "pw");
        let a = Session::new(&account);
        let b = Session::new(&account);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_admin_session() {
        let admin = Account::with_role("Admin", "admin@swapwise.dev", "pw", AccountRole::Admin);
        assert!(Session::new(&admin).is_admin());
    }
}
