//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use hamstudy_bot::command::{adapters::InMemoryCommandRegistry, services::CommandDispatcher};
use hamstudy_bot::config::BotConfig;
use hamstudy_bot::exam::{
    adapters::InMemoryExamDirectory,
    domain::{ExamSession, TeamId},
    services::ExamLookupService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Dispatcher wired to the in-memory directory.
pub type Dispatcher = CommandDispatcher<InMemoryCommandRegistry, InMemoryExamDirectory, DefaultClock>;

/// Provides a fresh in-memory directory for each test.
#[fixture]
pub fn directory() -> Arc<InMemoryExamDirectory> {
    Arc::new(InMemoryExamDirectory::new())
}

/// Builds a lookup service that shows at most `limit` sessions.
pub fn service_with_limit(
    directory: &Arc<InMemoryExamDirectory>,
    limit: usize,
) -> ExamLookupService<InMemoryExamDirectory> {
    let config = BotConfig::default().with_session_limit(limit);
    ExamLookupService::from_config(Arc::clone(directory), &config)
}

/// Builds a dispatcher over the given directory.
pub fn dispatcher(directory: &Arc<InMemoryExamDirectory>) -> Dispatcher {
    CommandDispatcher::new(
        Arc::new(InMemoryCommandRegistry::new()),
        ExamLookupService::new(Arc::clone(directory)),
        Arc::new(DefaultClock),
    )
}

/// Builds an in-person session for the given team and VEC code.
pub fn in_person_session(team: &str, vec: &str, fee: f64) -> ExamSession {
    ExamSession {
        info_link: format!("/sessions/{team}"),
        team_id: TeamId::Text(team.to_owned()),
        date: "2030-03-02T14:30:00.000Z".to_owned(),
        online_session: false,
        formatted_addr: Some("1 Radio Rd, Newington, CT 06111".to_owned()),
        prereg_required: true,
        vec: vec.to_owned(),
        test_fee: fee,
    }
}
