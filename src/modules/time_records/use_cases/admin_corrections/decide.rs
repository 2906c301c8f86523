// Pure decision functions for admin corrections.
//
// Responsibilities
// - Apply a correction to an already resolved record and return the record to save.
// - Enforce the same temporal rules as the punch cycle: clock-out after clock-in, break end
//   after break start, one open break per record, one record per user and day.
// - Never perform input or output. Company scoping happens before these run.

use chrono::{DateTime, Utc};

use crate::modules::time_records::core::break_ledger::BreakLedgerError;
use crate::modules::time_records::core::record::{BreakRecord, TimeRecord, TimeRecordAggregate};
use crate::modules::time_records::core::scope::CompanyScope;
use crate::modules::time_records::use_cases::admin_corrections::commands::{
    AdminAddBreak, AdminCreateRecord, AdminEditBreak, AdminSetClockOut,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Lifecycle;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CorrectionRejected {
    #[error("clockOut must be after clockIn")]
    ClockOutNotAfterClockIn,

    #[error("a time record already exists for this user on this date")]
    RecordExistsForDay,

    #[error(transparent)]
    Ledger(#[from] BreakLedgerError),
}

impl From<CorrectionRejected> for ApplicationError {
    fn from(rejected: CorrectionRejected) -> Self {
        match rejected {
            CorrectionRejected::ClockOutNotAfterClockIn => {
                ApplicationError::InvalidArgument(rejected.to_string())
            }
            CorrectionRejected::RecordExistsForDay => {
                ApplicationError::Conflict(rejected.to_string())
            }
            CorrectionRejected::Ledger(error) => ApplicationError::from(error),
        }
    }
}

fn ensure_clock_out_after(
    clock_in: DateTime<Utc>,
    clock_out: DateTime<Utc>,
) -> Result<(), CorrectionRejected> {
    if clock_out <= clock_in {
        return Err(CorrectionRejected::ClockOutNotAfterClockIn);
    }
    Ok(())
}

/// Validates the interval of a new record before anything is looked up.
pub fn validate_create(command: &AdminCreateRecord) -> Result<(), CorrectionRejected> {
    match command.clock_out {
        Some(clock_out) => ensure_clock_out_after(command.clock_in, clock_out),
        None => Ok(()),
    }
}

pub fn decide_create(
    scope: &CompanyScope,
    existing: Option<&TimeRecordAggregate>,
    command: AdminCreateRecord,
) -> Result<TimeRecordAggregate, CorrectionRejected> {
    validate_create(&command)?;
    if existing.is_some_and(TimeRecordAggregate::is_active) {
        return Err(CorrectionRejected::RecordExistsForDay);
    }
    let mut record = TimeRecord::open(
        command.record_id,
        command.user_id,
        scope.company_id(),
        command.clock_in,
    );
    record.clock_out = command.clock_out;
    record.closed_by_id = command.clock_out.map(|_| scope.admin_id());
    Ok(TimeRecordAggregate::new(record))
}

pub fn decide_set_clock_out(
    scope: &CompanyScope,
    mut aggregate: TimeRecordAggregate,
    command: AdminSetClockOut,
) -> Result<TimeRecordAggregate, CorrectionRejected> {
    ensure_clock_out_after(aggregate.record.clock_in, command.clock_out)?;
    aggregate.record.clock_out = Some(command.clock_out);
    aggregate.record.closed_by_id = Some(scope.admin_id());
    Ok(aggregate)
}

pub fn decide_add_break(
    scope: &CompanyScope,
    mut aggregate: TimeRecordAggregate,
    command: AdminAddBreak,
) -> Result<(TimeRecordAggregate, BreakRecord), CorrectionRejected> {
    let time_record_id = aggregate.id();
    let added = aggregate
        .add_break(BreakRecord {
            id: command.break_id,
            time_record_id,
            started_at: command.started_at,
            ended_at: command.ended_at,
            registered_by_id: Some(scope.admin_id()),
        })?
        .clone();
    Ok((aggregate, added))
}

pub fn decide_edit_break(
    scope: &CompanyScope,
    mut aggregate: TimeRecordAggregate,
    command: AdminEditBreak,
) -> Result<(TimeRecordAggregate, BreakRecord), CorrectionRejected> {
    let edited = aggregate
        .edit_break(
            command.break_id,
            command.started_at,
            command.ended_at,
            Some(scope.admin_id()),
        )?
        .clone();
    Ok((aggregate, edited))
}

pub fn decide_delete(mut aggregate: TimeRecordAggregate, at: DateTime<Utc>) -> TimeRecordAggregate {
    aggregate.record.lifecycle = Lifecycle::Deleted { at };
    aggregate
}
