//! In-memory exam directory adapter for tests and offline runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::exam::{
    domain::{ExamSession, LicenseRecord, LookupId, SessionQuery, SessionRecord},
    ports::{ExamDirectory, ExamDirectoryError, ExamDirectoryResult, LicenseLookup},
};

/// In-memory exam directory.
///
/// Serves a fixed session list regardless of filters, records every query it
/// receives, and can simulate an outage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExamDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    sessions: Vec<SessionRecord>,
    licenses: HashMap<String, LicenseRecord>,
    received_queries: Vec<SessionQuery>,
    outage: Option<String>,
}

impl InMemoryExamDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sessions returned by every search.
    ///
    /// # Errors
    ///
    /// Returns [`ExamDirectoryError::Decode`] when a session cannot be
    /// encoded as JSON, and transport errors when lock acquisition fails.
    pub fn set_sessions(&self, sessions: Vec<ExamSession>) -> ExamDirectoryResult<()> {
        let records = sessions
            .iter()
            .map(|session| serde_json::to_value(session).map(SessionRecord::from))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ExamDirectoryError::Decode(err.to_string()))?;
        self.set_session_records(records)
    }

    /// Replaces the raw session entries returned by every search.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_session_records(&self, records: Vec<SessionRecord>) -> ExamDirectoryResult<()> {
        self.write()?.sessions = records;
        Ok(())
    }

    /// Stores a licence record under a callsign or FRN (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn insert_license(
        &self,
        lookup_id: &str,
        record: LicenseRecord,
    ) -> ExamDirectoryResult<()> {
        self.write()?
            .licenses
            .insert(lookup_id.trim().to_ascii_uppercase(), record);
        Ok(())
    }

    /// Makes every subsequent request fail with a transport error.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn simulate_outage(&self, reason: impl Into<String>) -> ExamDirectoryResult<()> {
        self.write()?.outage = Some(reason.into());
        Ok(())
    }

    /// Returns the queries received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn received_queries(&self) -> ExamDirectoryResult<Vec<SessionQuery>> {
        Ok(self.read()?.received_queries.clone())
    }

    fn read(&self) -> ExamDirectoryResult<std::sync::RwLockReadGuard<'_, InMemoryDirectoryState>> {
        self.state
            .read()
            .map_err(|err| ExamDirectoryError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(
        &self,
    ) -> ExamDirectoryResult<std::sync::RwLockWriteGuard<'_, InMemoryDirectoryState>> {
        self.state
            .write()
            .map_err(|err| ExamDirectoryError::transport(std::io::Error::other(err.to_string())))
    }
}

fn check_outage(state: &InMemoryDirectoryState) -> ExamDirectoryResult<()> {
    match &state.outage {
        Some(reason) => Err(ExamDirectoryError::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            reason.clone(),
        ))),
        None => Ok(()),
    }
}

#[async_trait]
impl ExamDirectory for InMemoryExamDirectory {
    async fn find_sessions(
        &self,
        query: &SessionQuery,
    ) -> ExamDirectoryResult<Vec<SessionRecord>> {
        let mut state = self.write()?;
        state.received_queries.push(query.clone());
        check_outage(&state)?;
        Ok(state.sessions.clone())
    }

    async fn lookup_license(&self, lookup_id: &LookupId) -> ExamDirectoryResult<LicenseLookup> {
        let state = self.read()?;
        check_outage(&state)?;
        Ok(state
            .licenses
            .get(&lookup_id.as_str().to_ascii_uppercase())
            .cloned()
            .map_or(LicenseLookup::NotFound, LicenseLookup::Found))
    }
}
