//! # drai-contracts
//!
//! Shared types and contracts for the dr-ai consultation core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions, fixed reply texts and error types.

pub mod diagnosis;
pub mod error;
pub mod profile;
pub mod response;
