//! Application services for the exam subsystem.

mod lookup;

pub use lookup::{ExamLookupService, ExamServiceError, ExamServiceResult, SESSIONS_TITLE};
