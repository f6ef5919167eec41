use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::account::AccountId;

/// Unique identifier for a swap request, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A directed proposal to exchange one named skill for another.
///
/// The requester offers one of their own skills and asks for one of the
/// recipient's. Only the recipient may resolve the request, and a resolved
/// request never changes status again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRequest {
    pub id: RequestId,
    pub requester: AccountId,
    pub recipient: AccountId,
    /// Skill the requester is offering to teach, from their own offered list.
    pub offered_skill: String,
    /// Skill the requester wants, from the recipient's offered list.
    pub requested_skill: String,
    /// Freeform note accompanying the proposal.
    pub message: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SwapRequest {
    /// Create a pending request. Validation against the two accounts' skill
    /// lists happens in the directory service before construction.
    pub fn new(
        requester: AccountId,
        recipient: AccountId,
        offered_skill: &str,
        requested_skill: &str,
        message: &str,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RequestId::new(),
            requester,
            recipient,
            offered_skill: offered_skill.to_string(),
            requested_skill: requested_skill.to_string(),
            message: message.to_string(),
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the recipient's decision and bump the update timestamp.
    ///
    /// Callers must reject terminal requests first; this is a plain state
    /// write, not the guard.
    pub fn resolve(&mut self, decision: SwapDecision) {
        self.status = decision.into_status();
        self.updated_at = Utc::now();
    }
}

/// Swap request lifecycle states.
///
/// Pending is initial; Accepted and Rejected are terminal. No transition
/// leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    /// Whether this state admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Accepted | RequestStatus::Rejected)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Accepted => write!(f, "accepted"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "accepted" => Ok(RequestStatus::Accepted),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(format!("invalid request status: '{other}'")),
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

/// The recipient's answer to a pending swap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapDecision {
    Accept,
    Reject,
}

impl SwapDecision {
    /// The terminal status this decision produces.
    pub fn into_status(self) -> RequestStatus {
        match self {
            SwapDecision::Accept => RequestStatus::Accepted,
            SwapDecision::Reject => RequestStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SwapRequest {
        SwapRequest::new(
            AccountId::new(),
            AccountId::new(),
            "Python",
            "JavaScript",
            "hi",
        )
    }

    #[test]
    fn test_new_request_is_pending() {
        let r = request();
        assert_eq!(r.status, RequestStatus::Pending);
        assert_eq!(r.created_at, r.updated_at);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Accepted.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_resolve_accept() {
        let mut r = request();
        r.resolve(SwapDecision::Accept);
        assert_eq!(r.status, RequestStatus::Accepted);
        assert!(r.updated_at >= r.created_at);
    }

    #[test]
    fn test_decision_maps_to_status() {
        assert_eq!(SwapDecision::Accept.into_status(), RequestStatus::Accepted);
        assert_eq!(SwapDecision::Reject.into_status(), RequestStatus::Rejected);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Accepted,
            RequestStatus::Rejected,
        ] {
            let parsed: RequestStatus = status.to_string().parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_request_id_display_roundtrip() {
        let id = RequestId::new();
        let parsed: RequestId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
