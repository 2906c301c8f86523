use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::time_records::core::record::{BreakRecord, TimeRecord, TimeRecordAggregate};
use crate::shared::core::identity::Lifecycle;
use crate::shared::core::primitives::normalize;
use crate::tests::fixtures::{COMPANY_A, USER_U, day};

pub struct TimeRecordBuilder {
    record: TimeRecord,
    breaks: Vec<(DateTime<Utc>, Option<DateTime<Utc>>)>,
}

impl Default for TimeRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeRecordBuilder {
    pub fn new() -> Self {
        Self {
            record: TimeRecord::open(Uuid::now_v7(), USER_U, COMPANY_A, day(2, 9, 0)),
            breaks: Vec::new(),
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.record.id = v;
        self
    }

    pub fn user_id(mut self, v: Uuid) -> Self {
        self.record.user_id = v;
        self
    }

    pub fn company_id(mut self, v: Uuid) -> Self {
        self.record.company_id = v;
        self
    }

    /// Also moves the record to the calendar day of `v`.
    pub fn clock_in(mut self, v: DateTime<Utc>) -> Self {
        self.record.date = normalize(v);
        self.record.clock_in = v;
        self
    }

    pub fn clock_out(mut self, v: DateTime<Utc>) -> Self {
        self.record.clock_out = Some(v);
        self
    }

    pub fn closed_by(mut self, v: Uuid) -> Self {
        self.record.closed_by_id = Some(v);
        self
    }

    pub fn deleted_at(mut self, v: DateTime<Utc>) -> Self {
        self.record.lifecycle = Lifecycle::Deleted { at: v };
        self
    }

    pub fn open_break(mut self, started_at: DateTime<Utc>) -> Self {
        self.breaks.push((started_at, None));
        self
    }

    pub fn closed_break(mut self, started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Self {
        self.breaks.push((started_at, Some(ended_at)));
        self
    }

    pub fn build(self) -> TimeRecordAggregate {
        let mut aggregate = TimeRecordAggregate::new(self.record);
        for (started_at, ended_at) in self.breaks {
            let entry = BreakRecord {
                id: Uuid::now_v7(),
                time_record_id: aggregate.id(),
                started_at,
                ended_at,
                registered_by_id: None,
            };
            aggregate.add_break(entry).expect("fixture break should be valid");
        }
        aggregate
    }
}
