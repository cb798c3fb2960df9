//! Port trait definitions for the exam subsystem.

pub mod directory;

pub use directory::{ExamDirectory, ExamDirectoryError, ExamDirectoryResult, LicenseLookup};
