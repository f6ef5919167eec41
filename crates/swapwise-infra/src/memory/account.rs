//! In-memory account store.
//!
//! Implements `AccountRepository` from `swapwise-core` with a vector in
//! insertion order plus email and id indexes. The email index doubles as
//! the uniqueness check, making registration an atomic check-then-insert.

use std::collections::HashMap;

use swapwise_core::repository::account::AccountRepository;
use swapwise_types::account::{Account, AccountId};
use swapwise_types::error::RepositoryError;

/// Vector-backed implementation of `AccountRepository`.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: Vec<Account>,
    by_email: HashMap<String, usize>,
    by_id: HashMap<AccountId, usize>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountRepository for MemoryAccountStore {
    fn insert(&mut self, account: Account) -> Result<(), RepositoryError> {
        if self.by_email.contains_key(&account.email) {
            return Err(RepositoryError::Conflict(account.email));
        }
        let index = self.accounts.len();
        self.by_email.insert(account.email.clone(), index);
        self.by_id.insert(account.id.clone(), index);
        self.accounts.push(account);
        Ok(())
    }

    fn get_by_email(&self, email: &str) -> Option<&Account> {
        self.by_email
            .get(email)
            .and_then(|&index| self.accounts.get(index))
    }

    fn get_by_email_mut(&mut self, email: &str) -> Option<&mut Account> {
        let index = *self.by_email.get(email)?;
        self.accounts.get_mut(index)
    }

    fn get_by_id(&self, id: &AccountId) -> Option<&Account> {
        self.by_id
            .get(id)
            .and_then(|&index| self.accounts.get(index))
    }

    fn get_by_id_mut(&mut self, id: &AccountId) -> Option<&mut Account> {
        let index = *self.by_id.get(id)?;
        self.accounts.get_mut(index)
    }

    fn list(&self) -> &[Account] {
        &self.accounts
    }
}
