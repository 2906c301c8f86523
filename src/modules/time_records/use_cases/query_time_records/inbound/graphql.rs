use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::time_records::use_cases::query_time_records::projection::{
    AdminTimeRecordView, BreakView, CloserSummary, TimeRecordView, UserSummary,
};
use crate::shared::core::identity::Actor;
use crate::shared::core::primitives::parse_calendar_day;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlBreakRecord {
    pub id: Uuid,
    pub time_record_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub registered_by_id: Option<Uuid>,
}

impl From<BreakView> for GqlBreakRecord {
    fn from(v: BreakView) -> Self {
        Self {
            id: v.id,
            time_record_id: v.time_record_id,
            started_at: v.started_at,
            ended_at: v.ended_at,
            registered_by_id: v.registered_by_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub date: DateTime<Utc>,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub closed_by_id: Option<Uuid>,
    pub breaks: Vec<GqlBreakRecord>,
}

impl From<TimeRecordView> for GqlTimeRecord {
    fn from(v: TimeRecordView) -> Self {
        Self {
            id: v.id,
            user_id: v.user_id,
            company_id: v.company_id,
            date: v.date,
            clock_in: v.clock_in,
            clock_out: v.clock_out,
            closed_by_id: v.closed_by_id,
            breaks: v.breaks.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlUserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<UserSummary> for GqlUserSummary {
    fn from(v: UserSummary) -> Self {
        Self {
            id: v.id,
            name: v.name,
            email: v.email,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCloserSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<CloserSummary> for GqlCloserSummary {
    fn from(v: CloserSummary) -> Self {
        Self {
            id: v.id,
            name: v.name,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCompanyTimeRecord {
    pub record: GqlTimeRecord,
    pub user: Option<GqlUserSummary>,
    pub closed_by: Option<GqlCloserSummary>,
}

impl From<AdminTimeRecordView> for GqlCompanyTimeRecord {
    fn from(v: AdminTimeRecordView) -> Self {
        Self {
            record: v.record.into(),
            user: v.user.map(Into::into),
            closed_by: v.closed_by.map(Into::into),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn my_time_records(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTimeRecord>> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let records = state.queries.list_mine(actor).await.map_err(gql_error)?;
        Ok(records
            .iter()
            .map(|record| TimeRecordView::from(record).into())
            .collect())
    }

    /// `date` is a date (`2024-01-02`) or an ISO-8601 date-time.
    async fn my_time_record(
        &self,
        context: &Context<'_>,
        date: String,
    ) -> GqlResult<GqlTimeRecord> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let day = parse_calendar_day(&date).map_err(gql_error)?;
        let record = state
            .queries
            .find_mine_by_day(actor, day)
            .await
            .map_err(gql_error)?;
        Ok(TimeRecordView::from(&record).into())
    }

    async fn company_time_records(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Vec<GqlCompanyTimeRecord>> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let views = state.queries.list_company(actor).await.map_err(gql_error)?;
        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn company_time_record(
        &self,
        context: &Context<'_>,
        id: Uuid,
    ) -> GqlResult<GqlCompanyTimeRecord> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let view = state
            .queries
            .find_in_company(actor, id)
            .await
            .map_err(gql_error)?;
        Ok(view.into())
    }
}
