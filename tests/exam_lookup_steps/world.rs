//! Shared world state for exam lookup BDD scenarios.

use std::sync::Arc;

use hamstudy_bot::command::{
    adapters::InMemoryCommandRegistry, domain::CommandReply, services::CommandDispatcher,
};
use hamstudy_bot::exam::{adapters::InMemoryExamDirectory, services::ExamLookupService};
use mockable::DefaultClock;
use rstest::fixture;

/// Dispatcher type used by the BDD world.
pub type TestDispatcher =
    CommandDispatcher<InMemoryCommandRegistry, InMemoryExamDirectory, DefaultClock>;

/// Scenario world for exam lookup behaviour tests.
pub struct ExamLookupWorld {
    pub directory: Arc<InMemoryExamDirectory>,
    pub dispatcher: TestDispatcher,
    pub reply: Option<CommandReply>,
}

impl ExamLookupWorld {
    /// Creates a world backed by an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        let directory = Arc::new(InMemoryExamDirectory::new());
        let dispatcher = CommandDispatcher::new(
            Arc::new(InMemoryCommandRegistry::new()),
            ExamLookupService::new(Arc::clone(&directory)),
            Arc::new(DefaultClock),
        );
        Self {
            directory,
            dispatcher,
            reply: None,
        }
    }

    /// Returns the last reply or an error when no command ran.
    ///
    /// # Errors
    ///
    /// Returns an error when no command has been dispatched yet.
    pub fn reply(&self) -> eyre::Result<&CommandReply> {
        self.reply
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no command reply in scenario world"))
    }
}

impl Default for ExamLookupWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ExamLookupWorld {
    ExamLookupWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
