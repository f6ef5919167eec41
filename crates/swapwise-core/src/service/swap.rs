//! Swap-request lifecycle operations on the directory.
//!
//! Creation validates everything before any write; the first failing check
//! determines the error. Resolution is recipient-only and terminal states
//! are final.

use swapwise_types::account::AccountId;
use swapwise_types::error::SwapError;
use swapwise_types::request::{RequestId, SwapDecision, SwapRequest};
use swapwise_types::session::Session;

use crate::repository::account::AccountRepository;
use crate::repository::request::SwapRequestRepository;
use crate::service::Directory;

impl<A: AccountRepository, R: SwapRequestRepository> Directory<A, R> {
    /// Propose a swap to another account.
    ///
    /// Validation order: active session, recipient existence, recipient
    /// suspension, the requester's own offered-skill membership, then the
    /// recipient's offered-skill membership. Skill membership is an exact
    /// match against the account's own list, never the global catalog.
    pub fn create_request(
        &mut self,
        session: &Session,
        recipient_email: &str,
        offered_skill: &str,
        requested_skill: &str,
        message: &str,
    ) -> Result<RequestId, SwapError> {
        if !self.is_current(session) {
            return Err(SwapError::NotAuthenticated);
        }
        let requester = self
            .accounts
            .get_by_id(&session.account_id)
            .ok_or(SwapError::NotAuthenticated)?;
        let recipient = self
            .accounts
            .get_by_email(recipient_email)
            .ok_or(SwapError::RecipientNotFound)?;
        if recipient.suspended {
            return Err(SwapError::RecipientSuspended);
        }
        if !requester.offers_skill(offered_skill) {
            return Err(SwapError::OfferedSkillNotOwned(offered_skill.to_string()));
        }
        if !recipient.offers_skill(requested_skill) {
            return Err(SwapError::RequestedSkillNotOffered(
                requested_skill.to_string(),
            ));
        }

        let request = SwapRequest::new(
            requester.id.clone(),
            recipient.id.clone(),
            offered_skill,
            requested_skill,
            message,
        );
        let id = request.id.clone();
        tracing::info!(
            %id,
            requester = %session.email,
            recipient = recipient_email,
            offered_skill,
            requested_skill,
            "swap request created"
        );
        self.requests.insert(request);
        Ok(id)
    }

    /// Resolve a pending request as its recipient.
    ///
    /// Resolving a request that already reached a terminal state fails with
    /// `AlreadyResolved` and leaves the status unchanged.
    pub fn respond(
        &mut self,
        session: &Session,
        request_id: &RequestId,
        decision: SwapDecision,
    ) -> Result<(), SwapError> {
        if !self.is_current(session) {
            return Err(SwapError::NotAuthenticated);
        }
        let request = self.requests.get_mut(request_id).ok_or(SwapError::NotFound)?;
        if request.recipient != session.account_id {
            return Err(SwapError::NotRecipient);
        }
        if request.status.is_terminal() {
            return Err(SwapError::AlreadyResolved);
        }
        request.resolve(decision);
        tracing::info!(%request_id, status = %request.status, "swap request resolved");
        Ok(())
    }

    /// Incoming and outgoing requests for an account, both in creation
    /// order.
    pub fn requests_for(&self, id: &AccountId) -> (Vec<&SwapRequest>, Vec<&SwapRequest>) {
        let incoming = self
            .requests
            .list()
            .iter()
            .filter(|r| &r.recipient == id)
            .collect();
        let outgoing = self
            .requests
            .list()
            .iter()
            .filter(|r| &r.requester == id)
            .collect();
        (incoming, outgoing)
    }
}
