// A fully wired application over in-memory adapters, for router-level tests.

use axum::Router;
use std::sync::Arc;

use crate::modules::time_records::adapters::outbound::in_memory_records::InMemoryTimeRecords;
use crate::modules::time_records::core::ports::TimeRecordRepository;
use crate::modules::time_records::core::record::TimeRecordAggregate;
use crate::shared::core::clock::ManualClock;
use crate::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::users::UserAccountBuilder;
use crate::tests::fixtures::{ADMIN_A, ADMIN_B, COMPANY_A, COMPANY_B, USER_U, USER_V, day};

pub struct TestApp {
    pub state: AppState,
    pub records: Arc<InMemoryTimeRecords>,
    pub users: Arc<InMemoryUserDirectory>,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Company A has admin ADMIN_A and user USER_U, company B has ADMIN_B and USER_V.
    /// The clock starts at 2024-01-02 09:00 UTC.
    pub async fn seeded() -> Self {
        Self::build(InMemoryTimeRecords::new()).await
    }

    pub async fn with_offline_records() -> Self {
        let mut records = InMemoryTimeRecords::new();
        records.toggle_offline();
        Self::build(records).await
    }

    async fn build(records: InMemoryTimeRecords) -> Self {
        let users = Arc::new(InMemoryUserDirectory::new());
        for account in [
            UserAccountBuilder::new().id(USER_U).company_id(COMPANY_A),
            UserAccountBuilder::new()
                .id(USER_V)
                .name("Vic User")
                .company_id(COMPANY_B),
            UserAccountBuilder::new()
                .id(ADMIN_A)
                .name("Ada Admin")
                .company_id(COMPANY_A)
                .admin(),
            UserAccountBuilder::new()
                .id(ADMIN_B)
                .name("Bo Admin")
                .company_id(COMPANY_B)
                .admin(),
        ] {
            users.insert(account.build()).await;
        }

        let records = Arc::new(records);
        let clock = Arc::new(ManualClock::new(day(2, 9, 0)));
        let state = AppState::new(users.clone(), records.clone(), clock.clone());
        Self {
            state,
            records,
            users,
            clock,
        }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    pub async fn store(&self, aggregate: TimeRecordAggregate) {
        self.records
            .save(&aggregate, 0)
            .await
            .expect("seeding the repository failed");
    }
}
