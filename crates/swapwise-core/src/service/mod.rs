//! Domain services built on the repository ports.
//!
//! `Directory` is the composition root: it owns the account and request
//! stores, the single active session, and the announcement log. The swap
//! lifecycle and the moderation capability layer are separate impl blocks on
//! the same type.

pub mod admin;
pub mod directory;
pub mod swap;

pub use directory::Directory;

#[cfg(test)]
pub(crate) mod testing {
    //! Vec-backed port implementations for service tests. The production
    //! stores live in swapwise-infra; these stay minimal on purpose.

    use swapwise_types::account::{Account, AccountId};
    use swapwise_types::error::RepositoryError;
    use swapwise_types::request::{RequestId, SwapRequest};

    use crate::repository::account::AccountRepository;
    use crate::repository::request::SwapRequestRepository;
    use crate::service::Directory;

    #[derive(Default)]
    pub(crate) struct VecAccountStore {
        accounts: Vec<Account>,
    }

    impl AccountRepository for VecAccountStore {
        fn insert(&mut self, account: Account) -> Result<(), RepositoryError> {
            if self.accounts.iter().any(|a| a.email == account.email) {
                return Err(RepositoryError::Conflict(account.email));
            }
            self.accounts.push(account);
            Ok(())
        }

        fn get_by_email(&self, email: &str) -> Option<&Account> {
            self.accounts.iter().find(|a| a.email == email)
        }

        fn get_by_email_mut(&mut self, email: &str) -> Option<&mut Account> {
            self.accounts.iter_mut().find(|a| a.email == email)
        }

        fn get_by_id(&self, id: &AccountId) -> Option<&Account> {
            self.accounts.iter().find(|a| &a.id == id)
        }

        fn get_by_id_mut(&mut self, id: &AccountId) -> Option<&mut Account> {
            self.accounts.iter_mut().find(|a| &a.id == id)
        }

        fn list(&self) -> &[Account] {
            &self.accounts
        }
    }

    #[derive(Default)]
    pub(crate) struct VecRequestStore {
        requests: Vec<SwapRequest>,
    }

    impl SwapRequestRepository for VecRequestStore {
        fn insert(&mut self, request: SwapRequest) {
            self.requests.push(request);
        }

        fn get(&self, id: &RequestId) -> Option<&SwapRequest> {
            self.requests.iter().find(|r| &r.id == id)
        }

        fn get_mut(&mut self, id: &RequestId) -> Option<&mut SwapRequest> {
            self.requests.iter_mut().find(|r| &r.id == id)
        }

        fn list(&self) -> &[SwapRequest] {
            &self.requests
        }
    }

    pub(crate) type TestDirectory = Directory<VecAccountStore, VecRequestStore>;

    pub(crate) fn directory() -> TestDirectory {
        Directory::new(VecAccountStore::default(), VecRequestStore::default())
    }

    /// Flip the suspension flag directly, bypassing the admin gate.
    pub(crate) fn suspend(dir: &mut TestDirectory, email: &str) {
        dir.accounts.get_by_email_mut(email).unwrap().suspended = true;
    }
}
