//! Rendering of HamStudy records into embed fields.
//!
//! Renderers are pure functions of their input. Data-integrity problems in
//! remote records (malformed entries, unknown VEC codes, bad timestamps)
//! surface as [`RenderError`](crate::exam::domain::RenderError) rather than
//! being silently dropped.

mod license;
mod session;

pub use license::{compose_address, compose_name, render_license};
pub use session::{DEFAULT_SESSION_LIMIT, DEFAULT_SITE_BASE_URL, SessionRenderer, render_sessions};
