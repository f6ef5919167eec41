use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a skill appears across account skill lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

/// Aggregated platform statistics produced for administrators.
///
/// Skill rankings cover non-admin accounts only and use stable frequency
/// ordering: ties keep the order in which skills were first encountered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformReport {
    /// Registered accounts, excluding administrators.
    pub member_count: usize,
    /// Suspended accounts across the whole directory.
    pub suspended_count: usize,
    pub request_count: usize,
    pub accepted_count: usize,
    pub pending_count: usize,
    /// Feedback entries across the whole directory.
    pub feedback_count: usize,
    /// Up to five most-frequent offered skills.
    pub top_offered: Vec<SkillCount>,
    /// Up to five most-frequent wanted skills.
    pub top_wanted: Vec<SkillCount>,
}

/// A timestamped platform-wide broadcast from an administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            posted_at: Utc::now(),
        }
    }
}
