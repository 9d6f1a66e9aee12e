//! # drai-ref-mock
//!
//! Reference back-end for the dr-ai consultation app, built entirely on mock
//! data.
//!
//! Serves the four screens:
//!
//! 1. **Chat**: keyword-matched canned replies, quick questions and a mocked
//!    speech recognizer, with every exchange kept in a transcript.
//! 2. **Diagnosis**: sample conditions, symptoms and treatments with the
//!    overall confidence recomputed on each request.
//! 3. **Profile**: an in-memory profile that accepts partial updates.
//! 4. **Home**: the signed-in user and recommended doctors.
//!
//! All data is hardcoded and fictional. No external calls are made.

pub mod mock_data;
pub mod services;
