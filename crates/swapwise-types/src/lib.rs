//! Shared domain types for Swapwise.
//!
//! This crate contains the core domain types used across the Swapwise
//! platform: Account, Feedback, SwapRequest, Session, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod account;
pub mod config;
pub mod error;
pub mod feedback;
pub mod report;
pub mod request;
pub mod session;
