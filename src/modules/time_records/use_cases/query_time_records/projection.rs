// Read shapes returned to callers.
//
// - TimeRecordView: what a user sees of their own records.
// - AdminTimeRecordView: the same record plus who it belongs to and who closed it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::time_records::core::record::{BreakRecord, TimeRecordAggregate};
use crate::shared::infrastructure::user_directory::UserAccount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakView {
    pub id: Uuid,
    pub time_record_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub registered_by_id: Option<Uuid>,
}

impl From<&BreakRecord> for BreakView {
    fn from(entry: &BreakRecord) -> Self {
        Self {
            id: entry.id,
            time_record_id: entry.time_record_id,
            started_at: entry.started_at,
            ended_at: entry.ended_at,
            registered_by_id: entry.registered_by_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecordView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub date: DateTime<Utc>,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub closed_by_id: Option<Uuid>,
    pub breaks: Vec<BreakView>,
}

impl From<&TimeRecordAggregate> for TimeRecordView {
    fn from(aggregate: &TimeRecordAggregate) -> Self {
        let record = &aggregate.record;
        Self {
            id: record.id,
            user_id: record.user_id,
            company_id: record.company_id,
            date: record.date,
            clock_in: record.clock_in,
            clock_out: record.clock_out,
            closed_by_id: record.closed_by_id,
            breaks: aggregate.breaks().iter().map(BreakView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloserSummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTimeRecordView {
    #[serde(flatten)]
    pub record: TimeRecordView,
    /// None when the owner is no longer an active user.
    pub user: Option<UserSummary>,
    pub closed_by: Option<CloserSummary>,
}

impl AdminTimeRecordView {
    pub fn new(
        aggregate: &TimeRecordAggregate,
        owner: Option<&UserAccount>,
        closer: Option<&UserAccount>,
    ) -> Self {
        Self {
            record: TimeRecordView::from(aggregate),
            user: owner.map(|account| UserSummary {
                id: account.id,
                name: account.name.clone(),
                email: account.email.clone(),
            }),
            closed_by: closer.map(|account| CloserSummary {
                id: account.id,
                name: account.name.clone(),
            }),
        }
    }
}
