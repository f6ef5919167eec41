//! Account repository trait definition.

use swapwise_types::account::{Account, AccountId};
use swapwise_types::error::RepositoryError;

/// Repository trait for account storage.
///
/// Implementations live in swapwise-infra. Email is the external lookup key
/// and uniqueness is enforced at insertion as an atomic check-then-insert,
/// compared case-sensitively against the stored value.
pub trait AccountRepository {
    /// Insert a new account. Fails with `Conflict` when the email is taken.
    fn insert(&mut self, account: Account) -> Result<(), RepositoryError>;

    /// Look up an account by its email key.
    fn get_by_email(&self, email: &str) -> Option<&Account>;

    /// Mutable lookup by email key.
    fn get_by_email_mut(&mut self, email: &str) -> Option<&mut Account>;

    /// Look up an account by its unique ID.
    fn get_by_id(&self, id: &AccountId) -> Option<&Account>;

    /// Mutable lookup by unique ID.
    fn get_by_id_mut(&mut self, id: &AccountId) -> Option<&mut Account>;

    /// All accounts in insertion order. Listings and pagination rely on this
    /// order being stable.
    fn list(&self) -> &[Account];
}
