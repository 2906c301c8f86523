use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_records::use_cases::query_time_records::inbound::graphql::GqlTimeRecord;
use crate::modules::time_records::use_cases::query_time_records::projection::TimeRecordView;
use crate::shared::core::identity::Actor;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Advances today's attendance cycle by one step.
    async fn punch(&self, context: &Context<'_>) -> GqlResult<GqlTimeRecord> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let record = state
            .punch_handler
            .handle(actor)
            .await
            .map_err(gql_error)?;
        Ok(TimeRecordView::from(&record).into())
    }
}
