// Composition root: wires the in-memory adapters into the use case handlers.

use std::sync::Arc;

use crate::modules::time_records::adapters::outbound::in_memory_records::InMemoryTimeRecords;
use crate::modules::time_records::use_cases::admin_corrections::handler::AdminCorrectionsHandler;
use crate::modules::time_records::use_cases::punch::handler::PunchHandler;
use crate::modules::time_records::use_cases::query_time_records::handler::TimeRecordQueries;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<InMemoryUserDirectory>,
    pub punch_handler: Arc<PunchHandler<InMemoryTimeRecords>>,
    pub corrections: Arc<AdminCorrectionsHandler<InMemoryTimeRecords, InMemoryUserDirectory>>,
    pub queries: Arc<TimeRecordQueries<InMemoryTimeRecords, InMemoryUserDirectory>>,
}

impl AppState {
    pub fn new(
        users: Arc<InMemoryUserDirectory>,
        records: Arc<InMemoryTimeRecords>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            punch_handler: Arc::new(PunchHandler::new(records.clone(), clock.clone())),
            corrections: Arc::new(AdminCorrectionsHandler::new(
                records.clone(),
                users.clone(),
                clock,
            )),
            queries: Arc::new(TimeRecordQueries::new(records, users.clone())),
            users,
        }
    }
}
