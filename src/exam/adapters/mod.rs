//! Exam directory adapters.
//!
//! - [`http::HttpExamDirectory`]: the live HamStudy API over `reqwest`
//! - [`memory::InMemoryExamDirectory`]: canned data for tests and offline runs

pub mod http;
pub mod memory;

pub use http::HttpExamDirectory;
pub use memory::InMemoryExamDirectory;
