use thiserror::Error;

/// Errors from account registration.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("an account with email '{0}' already exists")]
    DuplicateEmail(String),
}

/// Errors from authentication.
///
/// The variants are checked in declaration order: existence first, then
/// suspension, then the credential. A suspended account with a correct
/// secret reports `Suspended`, never `BadCredential`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no account with that email")]
    NotFound,

    #[error("this account has been suspended")]
    Suspended,

    #[error("invalid credentials")]
    BadCredential,
}

/// Errors from profile reads and merge-updates.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("account not found")]
    NotFound,
}

/// Errors from feedback submission.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("you must be logged in to leave feedback")]
    NotAuthenticated,

    #[error("target account not found")]
    TargetNotFound,

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

/// Errors from the swap-request lifecycle.
///
/// Creation validates in a fixed order with no mutation before all checks
/// pass: recipient existence, recipient suspension, the requester's own
/// offered-skill membership, then the recipient's offered-skill membership.
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("you must be logged in to manage swap requests")]
    NotAuthenticated,

    #[error("recipient account not found")]
    RecipientNotFound,

    #[error("cannot send a request to a suspended account")]
    RecipientSuspended,

    #[error("you do not offer the skill '{0}'")]
    OfferedSkillNotOwned(String),

    #[error("the recipient does not offer the skill '{0}'")]
    RequestedSkillNotOffered(String),

    #[error("swap request not found")]
    NotFound,

    #[error("only the recipient may respond to a request")]
    NotRecipient,

    #[error("this request has already been resolved")]
    AlreadyResolved,
}

/// Errors from moderation operations.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("admin access required")]
    NotAuthorized,

    #[error("account not found")]
    AccountNotFound,
}

/// Errors from repository operations (used by trait definitions in
/// swapwise-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}
