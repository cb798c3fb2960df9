//! HTTP adapter for the HamStudy API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::config::BotConfig;
use crate::exam::{
    domain::{LicenseRecord, LookupId, SessionQuery, SessionRecord},
    ports::{ExamDirectory, ExamDirectoryError, ExamDirectoryResult, LicenseLookup},
};

/// Exam directory backed by the HamStudy HTTP API.
///
/// The underlying [`Client`] is built once with the configured timeout and
/// `User-Agent` and reused for every request.
#[derive(Debug, Clone)]
pub struct HttpExamDirectory {
    client: Client,
    api_base_url: Url,
}

impl HttpExamDirectory {
    /// Builds the adapter and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ExamDirectoryError::Transport`] when the HTTP client cannot
    /// be constructed (for example an invalid `User-Agent` value).
    pub fn new(config: &BotConfig) -> ExamDirectoryResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(ExamDirectoryError::transport)?;
        Ok(Self::with_client(client, config.api_base_url().clone()))
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn with_client(client: Client, api_base_url: Url) -> Self {
        Self {
            client,
            api_base_url,
        }
    }
}

#[async_trait]
impl ExamDirectory for HttpExamDirectory {
    async fn find_sessions(
        &self,
        query: &SessionQuery,
    ) -> ExamDirectoryResult<Vec<SessionRecord>> {
        let url = endpoint(&self.api_base_url, &["sessions"])?;
        debug!(%url, parameters = query.len(), "requesting exam sessions");

        let response = self
            .client
            .get(url)
            .query(&query.to_pairs())
            .send()
            .await
            .map_err(ExamDirectoryError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExamDirectoryError::Status(status.as_u16()));
        }

        response
            .json::<Vec<SessionRecord>>()
            .await
            .map_err(|err| ExamDirectoryError::Decode(err.to_string()))
    }

    async fn lookup_license(&self, lookup_id: &LookupId) -> ExamDirectoryResult<LicenseLookup> {
        let url = endpoint(&self.api_base_url, &["uls", lookup_id.as_str()])?;
        debug!(%url, "requesting ULS record");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ExamDirectoryError::transport)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(LicenseLookup::NotFound);
        }
        if !status.is_success() {
            return Err(ExamDirectoryError::Status(status.as_u16()));
        }

        response
            .json::<LicenseRecord>()
            .await
            .map(LicenseLookup::Found)
            .map_err(|err| ExamDirectoryError::Decode(err.to_string()))
    }
}

/// Appends percent-encoded path segments to the API base URL.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> ExamDirectoryResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ExamDirectoryError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://hamstudy.org/api/v1", "https://hamstudy.org/api/v1/sessions")]
    #[case("https://hamstudy.org/api/v1/", "https://hamstudy.org/api/v1/sessions")]
    fn endpoint_appends_segments(#[case] raw_base: &str, #[case] expected: &str) {
        let base = Url::parse(raw_base).expect("valid base URL");

        let url = endpoint(&base, &["sessions"]).expect("base URL accepts segments");

        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn endpoint_encodes_lookup_id() {
        let base = Url::parse("https://hamstudy.org/api/v1").expect("valid base URL");

        let url = endpoint(&base, &["uls", "K1 ABC/2"]).expect("base URL accepts segments");

        assert_eq!(url.as_str(), "https://hamstudy.org/api/v1/uls/K1%20ABC%2F2");
    }

    #[rstest]
    fn endpoint_rejects_cannot_be_a_base_url() {
        let base = Url::parse("mailto:ops@example.com").expect("valid URL");

        let error = endpoint(&base, &["sessions"]).expect_err("mailto URLs have no path");

        assert!(matches!(error, ExamDirectoryError::InvalidEndpoint(_)));
    }

    #[rstest]
    fn new_builds_client_from_config() {
        let directory = HttpExamDirectory::new(&BotConfig::default());

        assert!(directory.is_ok());
    }
}
