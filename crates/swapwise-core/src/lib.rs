//! Business logic and repository trait definitions for Swapwise.
//!
//! This crate defines the "ports" (repository traits) that the
//! infrastructure layer implements. It depends only on `swapwise-types` --
//! never on `swapwise-infra` or any storage crate.

pub mod catalog;
pub mod repository;
pub mod service;
