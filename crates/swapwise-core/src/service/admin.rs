//! Moderation capability layer over the directory.
//!
//! Every operation first checks that the acting session is active and
//! carries the admin capability; either failure yields `NotAuthorized`.
//! Admins are ordinary accounts with a role flag, not a separate storage
//! type.

use std::collections::HashMap;

use swapwise_types::account::{Account, AccountRole};
use swapwise_types::error::AdminError;
use swapwise_types::report::{Announcement, PlatformReport, SkillCount};
use swapwise_types::request::{RequestStatus, SwapRequest};
use swapwise_types::session::Session;

use crate::repository::account::AccountRepository;
use crate::repository::request::SwapRequestRepository;
use crate::service::Directory;

/// How many skills the report ranks per direction.
const REPORT_TOP_SKILLS: usize = 5;

impl<A: AccountRepository, R: SwapRequestRepository> Directory<A, R> {
    fn require_admin(&self, session: &Session) -> Result<(), AdminError> {
        if !self.is_current(session) || !session.is_admin() {
            return Err(AdminError::NotAuthorized);
        }
        Ok(())
    }

    /// Suspend an account.
    ///
    /// The target must exist; suspending an already-suspended account is a
    /// safe no-op. Suspended accounts cannot log in, cannot receive new
    /// requests, and disappear from public listings.
    pub fn ban_account(&mut self, session: &Session, email: &str) -> Result<(), AdminError> {
        self.require_admin(session)?;
        let target = self
            .accounts
            .get_by_email_mut(email)
            .ok_or(AdminError::AccountNotFound)?;
        if target.suspended {
            tracing::debug!(email, "account already suspended");
            return Ok(());
        }
        target.suspended = true;
        tracing::warn!(email, "account suspended by moderation");
        Ok(())
    }

    /// Post a timestamped platform-wide announcement.
    pub fn broadcast(&mut self, session: &Session, message: &str) -> Result<(), AdminError> {
        self.require_admin(session)?;
        self.announcements.push(Announcement::new(message));
        tracing::info!(announcement = message, "announcement broadcast");
        Ok(())
    }

    /// All announcements in posting order.
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Every swap request in creation order, for moderation review.
    pub fn all_requests(&self, session: &Session) -> Result<&[SwapRequest], AdminError> {
        self.require_admin(session)?;
        Ok(self.requests.list())
    }

    /// Aggregate platform statistics.
    ///
    /// Account and skill figures exclude administrators; the suspension and
    /// feedback counts cover the whole directory. Skill rankings are stable:
    /// ties keep first-encountered order.
    pub fn generate_report(&self, session: &Session) -> Result<PlatformReport, AdminError> {
        self.require_admin(session)?;

        let accounts = self.accounts.list();
        let members = || {
            accounts
                .iter()
                .filter(|a| a.role != AccountRole::Admin)
        };

        let requests = self.requests.list();
        let accepted_count = requests
            .iter()
            .filter(|r| r.status == RequestStatus::Accepted)
            .count();
        let pending_count = requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count();

        Ok(PlatformReport {
            member_count: members().count(),
            suspended_count: accounts.iter().filter(|a| a.suspended).count(),
            request_count: requests.len(),
            accepted_count,
            pending_count,
            feedback_count: accounts.iter().map(|a| a.feedback.len()).sum(),
            top_offered: rank_skills(members(), |a| a.skills_offered.as_slice()),
            top_wanted: rank_skills(members(), |a| a.skills_wanted.as_slice()),
        })
    }
}

/// Rank skills by frequency across `accounts`, keeping first-encountered
/// order for ties, truncated to the report's top-N.
fn rank_skills<'a>(
    accounts: impl Iterator<Item = &'a Account>,
    pick: fn(&Account) -> &[String],
) -> Vec<SkillCount> {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for account in accounts {
        for skill in pick(account) {
            let entry = counts.entry(skill.as_str()).or_insert(0);
            if *entry == 0 {
                first_seen.push(skill.as_str());
            }
            *entry += 1;
        }
    }

    let mut ranked: Vec<SkillCount> = first_seen
        .into_iter()
        .map(|skill| SkillCount {
            skill: skill.to_string(),
            count: counts.get(skill).copied().unwrap_or(0),
        })
        .collect();
    // Stable sort: equal counts keep first-encountered order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(REPORT_TOP_SKILLS);
    ranked
}
