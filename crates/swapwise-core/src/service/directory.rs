//! The directory service: accounts, sessions, feedback, and search.
//!
//! `Directory` is the façade every caller goes through. It coordinates the
//! account and request stores, holds the single active session, and gates
//! mutating operations on an authenticated context. Searches and reads stay
//! available without a session except where visibility rules apply.

use swapwise_types::account::{Account, AccountId, AccountRole, ProfileUpdate};
use swapwise_types::error::{AuthError, FeedbackError, ProfileError, RegisterError};
use swapwise_types::feedback::{self, Feedback};
use swapwise_types::report::Announcement;
use swapwise_types::session::Session;

use crate::catalog;
use crate::repository::account::AccountRepository;
use crate::repository::request::SwapRequestRepository;

/// Composition root for the Swapwise platform.
///
/// Generic over the repository ports so storage stays swappable and tests
/// can run against minimal stores. The directory is single-session: a second
/// login replaces the active session without requiring a logout first.
pub struct Directory<A: AccountRepository, R: SwapRequestRepository> {
    pub(crate) accounts: A,
    pub(crate) requests: R,
    session: Option<Session>,
    pub(crate) announcements: Vec<Announcement>,
}

impl<A: AccountRepository, R: SwapRequestRepository> Directory<A, R> {
    pub fn new(accounts: A, requests: R) -> Self {
        Self {
            accounts,
            requests,
            session: None,
            announcements: Vec::new(),
        }
    }

    /// Register a new member account.
    ///
    /// The email key must be unused; comparison is case-sensitive against
    /// the stored value. New accounts start with empty skill lists, public
    /// visibility, and no suspension.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        secret: &str,
    ) -> Result<AccountId, RegisterError> {
        self.register_with_role(name, email, secret, AccountRole::Member)
    }

    /// Register an administrator. Used by platform bootstrap; admins never
    /// appear in public listings or report rankings.
    pub fn register_admin(
        &mut self,
        name: &str,
        email: &str,
        secret: &str,
    ) -> Result<AccountId, RegisterError> {
        self.register_with_role(name, email, secret, AccountRole::Admin)
    }

    fn register_with_role(
        &mut self,
        name: &str,
        email: &str,
        secret: &str,
        role: AccountRole,
    ) -> Result<AccountId, RegisterError> {
        let account = Account::with_role(name, email, secret, role);
        let id = account.id.clone();
        self.accounts
            .insert(account)
            .map_err(|_| RegisterError::DuplicateEmail(email.to_string()))?;
        tracing::info!(%id, email, "account registered");
        Ok(id)
    }

    /// Authenticate and open a session.
    ///
    /// Checks run in a fixed, observable order: existence, then suspension,
    /// then the credential. A suspended account with a correct secret gets
    /// `Suspended`, never `BadCredential`. Any previously active session is
    /// replaced implicitly.
    pub fn login(&mut self, email: &str, secret: &str) -> Result<Session, AuthError> {
        let account = self.accounts.get_by_email(email).ok_or(AuthError::NotFound)?;
        if account.suspended {
            tracing::warn!(email, "login attempt on suspended account");
            return Err(AuthError::Suspended);
        }
        if account.secret != secret {
            return Err(AuthError::BadCredential);
        }
        let session = Session::new(account);
        tracing::info!(email, "session opened");
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Close the active session, if any.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(email = %session.email, "session closed");
        }
    }

    /// The currently active session, if any.
    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether `session` is the directory's active session. Handles from
    /// replaced logins fail this check.
    pub(crate) fn is_current(&self, session: &Session) -> bool {
        self.session
            .as_ref()
            .is_some_and(|active| active.token == session.token)
    }

    /// Look up an account by email.
    pub fn account(&self, email: &str) -> Option<&Account> {
        self.accounts.get_by_email(email)
    }

    /// Look up an account by ID.
    pub fn account_by_id(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.get_by_id(id)
    }

    /// Apply a whitelisted merge-update to a profile.
    ///
    /// Only the fields carried by [`ProfileUpdate`] can change; `None`
    /// fields are left untouched.
    pub fn update_profile(
        &mut self,
        id: &AccountId,
        update: ProfileUpdate,
    ) -> Result<(), ProfileError> {
        let account = self.accounts.get_by_id_mut(id).ok_or(ProfileError::NotFound)?;

        if let Some(location) = update.location {
            account.location = Some(location);
        }
        if let Some(avatar_url) = update.avatar_url {
            account.avatar_url = Some(avatar_url);
        }
        if let Some(skills_offered) = update.skills_offered {
            account.skills_offered = skills_offered;
        }
        if let Some(skills_wanted) = update.skills_wanted {
            account.skills_wanted = skills_wanted;
        }
        if let Some(availability) = update.availability {
            account.availability = availability;
        }
        if let Some(visibility) = update.visibility {
            account.visibility = visibility;
        }

        tracing::debug!(%id, "profile updated");
        Ok(())
    }

    /// Mean feedback rating for an account; 0.0 when no feedback exists.
    pub fn average_rating(&self, id: &AccountId) -> Result<f64, ProfileError> {
        self.accounts
            .get_by_id(id)
            .map(Account::average_rating)
            .ok_or(ProfileError::NotFound)
    }

    /// The last `k` feedback entries for an account, in insertion order.
    pub fn recent_feedback(&self, id: &AccountId, k: usize) -> Result<&[Feedback], ProfileError> {
        self.accounts
            .get_by_id(id)
            .map(|account| account.recent_feedback(k))
            .ok_or(ProfileError::NotFound)
    }

    /// Leave feedback on another account's ledger.
    ///
    /// Requires an active session. The target is looked up before the
    /// rating is validated; nothing is stored on failure. Self-feedback is
    /// permitted but logged for moderation.
    pub fn submit_feedback(
        &mut self,
        session: &Session,
        target_email: &str,
        rating: u8,
        comment: &str,
    ) -> Result<(), FeedbackError> {
        if !self.is_current(session) {
            return Err(FeedbackError::NotAuthenticated);
        }
        let target = self
            .accounts
            .get_by_email_mut(target_email)
            .ok_or(FeedbackError::TargetNotFound)?;
        if !feedback::rating_in_bounds(rating) {
            return Err(FeedbackError::InvalidRating(rating));
        }
        if session.email == target.email {
            tracing::warn!(email = %session.email, "account left feedback on itself");
        }
        target
            .feedback
            .push(Feedback::new(&session.email, rating, comment));
        tracing::info!(author = %session.email, target = target_email, rating, "feedback recorded");
        Ok(())
    }

    /// Accounts offering a skill whose name contains `query`,
    /// case-insensitively. Private, suspended, and admin accounts never
    /// match.
    pub fn search_by_skill(&self, query: &str) -> Vec<&Account> {
        let needle = query.to_lowercase();
        self.accounts
            .list()
            .iter()
            .filter(|account| {
                account.is_discoverable()
                    && account
                        .skills_offered
                        .iter()
                        .any(|skill| skill.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Accounts whose availability text contains `query`,
    /// case-insensitively. Same visibility filter as the skill search.
    pub fn search_by_availability(&self, query: &str) -> Vec<&Account> {
        let needle = query.to_lowercase();
        self.accounts
            .list()
            .iter()
            .filter(|account| {
                account.is_discoverable() && account.availability.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// One page of public profiles in directory insertion order.
    ///
    /// Pages are 1-based; out-of-range pages yield an empty list, not an
    /// error.
    pub fn list_public_profiles(&self, page: usize, page_size: usize) -> Vec<&Account> {
        if page == 0 {
            return Vec::new();
        }
        let start = (page - 1).saturating_mul(page_size);
        self.accounts
            .list()
            .iter()
            .filter(|account| account.is_discoverable())
            .skip(start)
            .take(page_size)
            .collect()
    }

    /// Catalog skills matching `query` (case-insensitive substring).
    pub fn search_skills(&self, query: &str) -> Vec<&'static str> {
        catalog::search(query)
    }
}

#[cfg(test)]
mod tests {
    use swapwise_types::account::{ProfileUpdate, Visibility};
    use swapwise_types::error::{AuthError, FeedbackError, RegisterError};

    use crate::service::testing::{TestDirectory, directory, suspend};

    fn populated() -> TestDirectory {
        let mut dir = directory();
        for (name, email) in [
            ("Sakshi", "sakshi@x.com"),
            ("Yashpal", "yashpal@x.com"),
            ("Ayan", "ayan@x.com"),
        ] {
            dir.register(name, email, "pw").unwrap();
        }
        dir
    }

    fn set_offered(dir: &mut TestDirectory, email: &str, skills: &[&str]) {
        let id = dir.account(email).unwrap().id.clone();
        dir.update_profile(
            &id,
            ProfileUpdate {
                skills_offered: Some(skills.iter().map(|s| s.to_string()).collect()),
                ..Default::default()
            },
        )
        .unwrap();
    }

    #[test]
    fn test_register_then_duplicate_email_fails() {
        let mut dir = directory();
        dir.register("A", "a@x.com", "pw").unwrap();
        let err = dir.register("Other", "a@x.com", "pw2").unwrap_err();
        assert!(matches!(err, RegisterError::DuplicateEmail(email) if email == "a@x.com"));
    }

    #[test]
    fn test_email_comparison_is_case_sensitive() {
        let mut dir = directory();
        dir.register("A", "a@x.com", "pw").unwrap();
        assert!(dir.register("A2", "A@x.com", "pw").is_ok());
    }

    #[test]
    fn test_login_unknown_email_is_not_found() {
        let mut dir = populated();
        let err = dir.login("ghost@x.com", "pw").unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[test]
    fn test_login_suspended_wins_over_bad_credential() {
        let mut dir = populated();
        suspend(&mut dir, "sakshi@x.com");
        // Correct secret still reports Suspended.
        assert!(matches!(
            dir.login("sakshi@x.com", "pw").unwrap_err(),
            AuthError::Suspended
        ));
        // Wrong secret also reports Suspended, never BadCredential.
        assert!(matches!(
            dir.login("sakshi@x.com", "wrong").unwrap_err(),
            AuthError::Suspended
        ));
    }

    #[test]
    fn test_login_wrong_secret_is_bad_credential() {
        let mut dir = populated();
        assert!(matches!(
            dir.login("sakshi@x.com", "wrong").unwrap_err(),
            AuthError::BadCredential
        ));
    }

    #[test]
    fn test_second_login_replaces_session() {
        let mut dir = populated();
        let first = dir.login("sakshi@x.com", "pw").unwrap();
        let second = dir.login("yashpal@x.com", "pw").unwrap();
        assert!(!dir.is_current(&first));
        assert!(dir.is_current(&second));
        // The stale handle no longer authorizes gated operations.
        let err = dir
            .submit_feedback(&first, "yashpal@x.com", 5, "great")
            .unwrap_err();
        assert!(matches!(err, FeedbackError::NotAuthenticated));
    }

    #[test]
    fn test_logout_clears_session() {
        let mut dir = populated();
        let session = dir.login("sakshi@x.com", "pw").unwrap();
        dir.logout();
        assert!(dir.current_session().is_none());
        assert!(!dir.is_current(&session));
    }

    #[test]
    fn test_update_profile_merges_only_given_fields() {
        let mut dir = populated();
        let id = dir.account("sakshi@x.com").unwrap().id.clone();
        dir.update_profile(
            &id,
            ProfileUpdate {
                location: Some("Mumbai, Maharashtra".to_string()),
                availability: Some("Weekends".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        dir.update_profile(
            &id,
            ProfileUpdate {
                availability: Some("Evenings".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let account = dir.account("sakshi@x.com").unwrap();
        assert_eq!(account.location.as_deref(), Some("Mumbai, Maharashtra"));
        assert_eq!(account.availability, "Evenings");
        assert_eq!(account.visibility, Visibility::Public);
    }

    #[test]
    fn test_feedback_requires_session() {
        let mut dir = populated();
        let session = dir.login("sakshi@x.com", "pw").unwrap();
        dir.logout();
        let err = dir
            .submit_feedback(&session, "yashpal@x.com", 5, "great")
            .unwrap_err();
        assert!(matches!(err, FeedbackError::NotAuthenticated));
    }

    #[test]
    fn test_feedback_out_of_range_rating_not_stored() {
        let mut dir = populated();
        let session = dir.login("sakshi@x.com", "pw").unwrap();
        for rating in [0u8, 6] {
            let err = dir
                .submit_feedback(&session, "yashpal@x.com", rating, "x")
                .unwrap_err();
            assert!(matches!(err, FeedbackError::InvalidRating(r) if r == rating));
        }
        assert!(dir.account("yashpal@x.com").unwrap().feedback.is_empty());
    }

    #[test]
    fn test_feedback_boundary_ratings_accepted() {
        let mut dir = populated();
        let session = dir.login("sakshi@x.com", "pw").unwrap();
        dir.submit_feedback(&session, "yashpal@x.com", 1, "meh")
            .unwrap();
        dir.submit_feedback(&session, "yashpal@x.com", 5, "great")
            .unwrap();
        assert_eq!(dir.account("yashpal@x.com").unwrap().feedback.len(), 2);
    }

    #[test]
    fn test_feedback_unknown_target() {
        let mut dir = populated();
        let session = dir.login("sakshi@x.com", "pw").unwrap();
        let err = dir
            .submit_feedback(&session, "ghost@x.com", 5, "x")
            .unwrap_err();
        assert!(matches!(err, FeedbackError::TargetNotFound));
    }

    #[test]
    fn test_average_rating_tracks_ledger() {
        let mut dir = populated();
        let target = dir.account("yashpal@x.com").unwrap().id.clone();
        assert_eq!(dir.average_rating(&target).unwrap(), 0.0);

        let session = dir.login("sakshi@x.com", "pw").unwrap();
        dir.submit_feedback(&session, "yashpal@x.com", 5, "great")
            .unwrap();
        dir.submit_feedback(&session, "yashpal@x.com", 4, "good")
            .unwrap();
        assert_eq!(dir.average_rating(&target).unwrap(), 4.5);
    }

    #[test]
    fn test_search_by_skill_substring_case_insensitive() {
        let mut dir = populated();
        set_offered(&mut dir, "sakshi@x.com", &["Python", "Machine Learning"]);
        set_offered(&mut dir, "yashpal@x.com", &["JavaScript"]);

        let hits = dir.search_by_skill("script");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "yashpal@x.com");

        let hits = dir.search_by_skill("MACHINE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "sakshi@x.com");
    }

    #[test]
    fn test_search_excludes_private_suspended_admin() {
        let mut dir = populated();
        dir.register_admin("Admin", "admin@x.com", "pw").unwrap();
        set_offered(&mut dir, "sakshi@x.com", &["Python"]);
        set_offered(&mut dir, "yashpal@x.com", &["Python"]);
        set_offered(&mut dir, "ayan@x.com", &["Python"]);
        set_offered(&mut dir, "admin@x.com", &["Python"]);

        let sakshi = dir.account("sakshi@x.com").unwrap().id.clone();
        dir.update_profile(
            &sakshi,
            ProfileUpdate {
                visibility: Some(Visibility::Private),
                ..Default::default()
            },
        )
        .unwrap();
        suspend(&mut dir, "yashpal@x.com");

        let hits = dir.search_by_skill("Python");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "ayan@x.com");
    }

    #[test]
    fn test_search_by_availability() {
        let mut dir = populated();
        let id = dir.account("sakshi@x.com").unwrap().id.clone();
        dir.update_profile(
            &id,
            ProfileUpdate {
                availability: Some("Weekends, Evenings".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(dir.search_by_availability("weekend").len(), 1);
        assert!(dir.search_by_availability("mornings").is_empty());
    }

    #[test]
    fn test_pagination_slices_in_insertion_order() {
        let dir = populated();
        let page = dir.list_public_profiles(2, 2);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].email, "ayan@x.com");
    }

    #[test]
    fn test_pagination_out_of_range_is_empty() {
        let dir = populated();
        assert!(dir.list_public_profiles(5, 2).is_empty());
        assert!(dir.list_public_profiles(0, 2).is_empty());
    }

    #[test]
    fn test_search_skills_delegates_to_catalog() {
        let dir = directory();
        assert!(dir.search_skills("python").contains(&"Python"));
    }
}
