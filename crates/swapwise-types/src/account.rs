use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::feedback::Feedback;

/// Unique identifier for an account, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Create a new AccountId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create an AccountId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A registered participant on the Swapwise platform.
///
/// Accounts advertise the skills they offer and want, collect feedback from
/// other participants, and are referenced by swap requests as either
/// requester or recipient. Accounts are never hard-deleted; moderation
/// suspends them instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Freeform display name (duplicates allowed across accounts).
    pub name: String,
    /// External lookup key. Unique across all accounts, compared
    /// case-sensitively against the stored value.
    pub email: String,
    /// Login secret. Compared verbatim; credential hardening is out of scope.
    #[serde(skip_serializing, default)]
    pub secret: String,
    /// Freeform location, e.g. "Mumbai, Maharashtra".
    pub location: Option<String>,
    /// Profile photo reference.
    pub avatar_url: Option<String>,
    /// Skills this account can teach, in the order the owner listed them.
    pub skills_offered: Vec<String>,
    /// Skills this account wants to learn, in the order the owner listed them.
    pub skills_wanted: Vec<String>,
    /// Freeform availability descriptor, e.g. "Weekends, Evenings".
    pub availability: String,
    /// Whether the profile shows up in listings and searches.
    pub visibility: Visibility,
    /// Capability flag. Moderation operations check this rather than a
    /// distinct account type.
    pub role: AccountRole,
    /// Set by moderation. Suspended accounts cannot authenticate, cannot be
    /// targeted by new requests, and are excluded from public listings.
    pub suspended: bool,
    /// Ratings received from other participants, in insertion order.
    pub feedback: Vec<Feedback>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a fresh member account: empty skill lists, public visibility,
    /// not suspended.
    pub fn new(name: &str, email: &str, secret: &str) -> Self {
        Self::with_role(name, email, secret, AccountRole::Member)
    }

    /// Create an account with an explicit role (platform bootstrap uses this
    /// for the administrator).
    pub fn with_role(name: &str, email: &str, secret: &str, role: AccountRole) -> Self {
        Self {
            id: AccountId::new(),
            name: name.to_string(),
            email: email.to_string(),
            secret: secret.to_string(),
            location: None,
            avatar_url: None,
            skills_offered: Vec::new(),
            skills_wanted: Vec::new(),
            availability: String::new(),
            visibility: Visibility::Public,
            role,
            suspended: false,
            feedback: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Mean of all feedback ratings, or 0.0 when no feedback exists.
    pub fn average_rating(&self) -> f64 {
        if self.feedback.is_empty() {
            return 0.0;
        }
        let total: u32 = self.feedback.iter().map(|f| u32::from(f.rating)).sum();
        f64::from(total) / self.feedback.len() as f64
    }

    /// The last `k` feedback entries in insertion order.
    pub fn recent_feedback(&self, k: usize) -> &[Feedback] {
        let start = self.feedback.len().saturating_sub(k);
        &self.feedback[start..]
    }

    /// Whether this account offers `skill` (exact match against its own
    /// offered list, never the global catalog).
    pub fn offers_skill(&self, skill: &str) -> bool {
        self.skills_offered.iter().any(|s| s == skill)
    }

    /// Whether this account appears in public listings and searches:
    /// public visibility, not suspended, and not an administrator.
    pub fn is_discoverable(&self) -> bool {
        self.visibility == Visibility::Public
            && !self.suspended
            && self.role != AccountRole::Admin
    }
}

/// Profile visibility states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(format!("invalid visibility: '{other}'")),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Public
    }
}

/// Account capability levels.
///
/// Administrators gate moderation operations; they are ordinary accounts in
/// storage, distinguished only by this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Member,
    Admin,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Member => write!(f, "member"),
            AccountRole::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(AccountRole::Member),
            "admin" => Ok(AccountRole::Admin),
            other => Err(format!("invalid account role: '{other}'")),
        }
    }
}

impl Default for AccountRole {
    fn default() -> Self {
        AccountRole::Member
    }
}

/// Whitelisted merge-update for profile fields. `None` fields are left
/// untouched; there is no way to update anything outside this set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub skills_offered: Option<Vec<String>>,
    pub skills_wanted: Option<Vec<String>>,
    pub availability: Option<String>,
    pub visibility: Option<Visibility>,
}
