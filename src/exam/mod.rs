//! HamStudy exam session search and ULS licence lookup.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the query builder in [`domain`]
//! - Record renderers in [`render`]
//! - The remote directory contract in [`ports`]
//! - HTTP and in-memory directory implementations in [`adapters`]
//! - Orchestration in [`services`]
//!
//! # Example
//!
//! ```
//! use hamstudy_bot::exam::domain::{ExamType, SearchFilter, build_session_query};
//!
//! let filter = SearchFilter::new()
//!     .with_zip_code("62704")
//!     .with_exam_type(ExamType::InPerson)
//!     .with_start_date("2024-06-01");
//! let query = build_session_query(filter).expect("dates are ISO 8601");
//!
//! let names: Vec<_> = query.names().collect();
//! assert_eq!(names, ["zip", "startDate", "type", "includeFull"]);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod render;
pub mod services;

#[cfg(test)]
mod tests;
