//! Mocked back-end services for the dr-ai screens.
//!
//! Each module serves one screen from the static data in `mock_data`. All
//! calls are synchronous; nothing leaves the process.

pub mod chat;
pub mod diagnosis;
pub mod home;
pub mod profile;
