// Punch handler orchestrates the write flow.
//
// Responsibilities
// - Reject a user without a company before touching the repository.
// - Load today's active record, derive the AttendanceState and let the decider pick the
//   transition.
// - Save the evolved record against the version that was read, as one unit. A concurrent punch
//   that committed first makes this save fail instead of interleaving.

use std::sync::Arc;
use uuid::Uuid;

use crate::modules::time_records::core::evolve::evolve;
use crate::modules::time_records::core::ports::TimeRecordRepository;
use crate::modules::time_records::core::record::TimeRecordAggregate;
use crate::modules::time_records::core::state::AttendanceState;
use crate::modules::time_records::use_cases::punch::command::Punch;
use crate::modules::time_records::use_cases::punch::decide::{PunchRejected, decide_punch};
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Actor;
use crate::shared::core::primitives::normalize;

const OPERATION: &str = "failed to register punch";

pub struct PunchHandler<TRepository>
where
    TRepository: TimeRecordRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> PunchHandler<TRepository>
where
    TRepository: TimeRecordRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, actor: &Actor) -> Result<TimeRecordAggregate, ApplicationError> {
        if actor.company_id.is_none() {
            let rejected = PunchRejected::NotLinkedToCompany;
            tracing::warn!(user_id = %actor.id, reason = %rejected, "punch rejected");
            return Err(rejected.into());
        }
        let now = self.clock.now();
        let loaded = self
            .repository
            .find_active_for_day(actor.id, normalize(now))
            .await
            .map_err(ApplicationError::internal(OPERATION))?;
        let version = loaded.as_ref().map(|loaded| loaded.version).unwrap_or(0);
        let state = AttendanceState::derive(loaded.map(|loaded| loaded.value));
        let from = state.name();

        let command = Punch {
            user_id: actor.id,
            company_id: actor.company_id,
            at: now,
            fresh_id: Uuid::now_v7(),
        };
        let transition = decide_punch(&state, command).map_err(|rejected| {
            tracing::warn!(user_id = %actor.id, reason = %rejected, "punch rejected");
            ApplicationError::from(rejected)
        })?;
        let transition_name = transition.name();

        let aggregate = evolve(state, transition)
            .into_record()
            .ok_or_else(|| ApplicationError::Internal(OPERATION.to_string()))?;
        self.repository
            .save(&aggregate, version)
            .await
            .map_err(ApplicationError::internal(OPERATION))?;

        tracing::info!(
            user_id = %actor.id,
            record_id = %aggregate.id(),
            from,
            transition = transition_name,
            "punch registered"
        );
        Ok(aggregate)
    }
}
