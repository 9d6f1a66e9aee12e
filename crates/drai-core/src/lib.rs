//! # drai-core
//!
//! The pure logic behind the dr-ai consultation screens.
//!
//! This crate provides:
//! - `confidence::overall_confidence`, the diagnosis confidence aggregator
//! - `format`, display helpers for the diagnosis and profile screens
//! - the `Responder` trait that the chat service asks for replies
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drai_core::{overall_confidence, traits::Responder};
//! ```

pub mod confidence;
pub mod format;
pub mod traits;

pub use confidence::overall_confidence;
pub use traits::Responder;
