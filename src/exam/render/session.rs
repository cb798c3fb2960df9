//! Session listing renderer.

use minijinja::{Environment, context};

use crate::exam::domain::{
    EmbedField, ExamSession, RenderError, SessionRecord, VecCode, timestamp_token, yes_no,
};

/// Number of sessions shown when no limit is configured.
pub const DEFAULT_SESSION_LIMIT: usize = 5;

/// Public site hosting session info pages.
pub const DEFAULT_SITE_BASE_URL: &str = "https://hamstudy.org";

const SESSION_BODY_TEMPLATE: &str = concat!(
    "**When**: {{ when }}\n",
    "**Where**: {{ location }}\n",
    "**Pre-Registration Required**: {{ prereg }}\n",
    "**Remote**: {{ remote }}\n",
    "**VEC**: {{ vec }}\n",
    "**Fee**: {{ fee }}\n",
    "[**Session Link**]({{ link }})",
);

/// Renders exam sessions into embed fields.
#[derive(Debug, Clone)]
pub struct SessionRenderer {
    site_base_url: String,
}

impl SessionRenderer {
    /// Creates a renderer linking sessions under `site_base_url`.
    #[must_use]
    pub fn new(site_base_url: impl Into<String>) -> Self {
        Self {
            site_base_url: site_base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Renders at most `limit` session records in input order.
    ///
    /// Records past `limit` are never decoded. The first record that fails
    /// to decode or render aborts the whole listing.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a shown record is malformed, carries an
    /// unknown VEC code, or has a malformed date.
    pub fn render(
        &self,
        records: &[SessionRecord],
        limit: usize,
    ) -> Result<Vec<EmbedField>, RenderError> {
        records
            .iter()
            .take(limit)
            .map(|record| self.render_session(&record.decode()?))
            .collect()
    }

    /// Renders a single session as a full-width field titled by team.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] for unknown VEC codes, malformed dates, or
    /// template failures.
    pub fn render_session(&self, session: &ExamSession) -> Result<EmbedField, RenderError> {
        let when = timestamp_token(&session.date)?;
        let vec = VecCode::from_code(&session.vec)?;

        let body = Environment::new()
            .render_str(
                SESSION_BODY_TEMPLATE,
                context! {
                    when => when,
                    location => session.location(),
                    prereg => yes_no(session.prereg_required),
                    remote => yes_no(session.online_session),
                    vec => vec.label(),
                    fee => format!("${:.2}", session.test_fee),
                    link => self.session_link(session),
                },
            )
            .map_err(|err| RenderError::Template(err.to_string()))?;

        Ok(EmbedField::block(format!("Team {}", session.team_id), body))
    }

    fn session_link(&self, session: &ExamSession) -> String {
        if session.info_link.starts_with('/') {
            format!("{}{}", self.site_base_url, session.info_link)
        } else {
            format!("{}/{}", self.site_base_url, session.info_link)
        }
    }
}

impl Default for SessionRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_BASE_URL)
    }
}

/// Renders at most `limit` sessions with links on the public HamStudy site.
///
/// # Errors
///
/// See [`SessionRenderer::render`].
pub fn render_sessions(
    records: &[SessionRecord],
    limit: usize,
) -> Result<Vec<EmbedField>, RenderError> {
    SessionRenderer::default().render(records, limit)
}
