// Persisted shape of one user's day: the TimeRecord row and the BreakRecord rows it owns.
//
// Notes
// - `date` is always the UTC calendar day of `clock_in`, truncated to midnight.
// - Breaks are only reachable through the aggregate; see break_ledger.rs for the rules that
//   govern them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::core::identity::Lifecycle;
use crate::shared::core::primitives::normalize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub date: DateTime<Utc>,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub closed_by_id: Option<Uuid>,
    pub lifecycle: Lifecycle,
}

impl TimeRecord {
    pub fn open(id: Uuid, user_id: Uuid, company_id: Uuid, clock_in: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            company_id,
            date: normalize(clock_in),
            clock_in,
            clock_out: None,
            closed_by_id: None,
            lifecycle: Lifecycle::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakRecord {
    pub id: Uuid,
    pub time_record_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub registered_by_id: Option<Uuid>,
}

impl BreakRecord {
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// A record together with every break it owns. Saved and loaded as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRecordAggregate {
    pub record: TimeRecord,
    pub(super) breaks: Vec<BreakRecord>,
}

impl TimeRecordAggregate {
    pub fn new(record: TimeRecord) -> Self {
        Self {
            record,
            breaks: Vec::new(),
        }
    }

    /// Breaks in chronological order of `started_at`.
    pub fn breaks(&self) -> &[BreakRecord] {
        &self.breaks
    }

    pub fn id(&self) -> Uuid {
        self.record.id
    }

    pub fn is_active(&self) -> bool {
        self.record.lifecycle.is_active()
    }
}
