//! Domain types for exam session search and licence lookup.
//!
//! Everything here is pure: no network access and no clock. Query
//! construction lives in [`build_session_query`]; rendering of remote
//! records lives in [`crate::exam::render`].

mod embed;
mod error;
mod exam_type;
mod filter;
mod license;
pub mod query;
mod session;
mod timestamp;
mod vec_code;

pub use embed::{Embed, EmbedField};
pub use error::{DateField, ParseExamTypeError, ParseVecCodeError, QueryError, RenderError};
pub use exam_type::ExamType;
pub use filter::SearchFilter;
pub use license::{LicenseRecord, LookupId, yes_no};
pub use query::{QueryValue, SessionQuery, build_session_query};
pub use session::{ExamSession, SessionRecord, TeamId};
pub use timestamp::{is_iso_8601, timestamp_token, to_epoch_seconds};
pub use vec_code::VecCode;
