// AttendanceState is where a user's day stands, derived in one place from the stored record.
//
// Cycle
// - Absent -> ClockedIn -> ClosedPendingBreakDecision <-> OnBreak
// - Each punch advances exactly one step. See evolve.rs for the transition table.

use uuid::Uuid;

use crate::modules::time_records::core::record::TimeRecordAggregate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceState {
    /// No active record for the day.
    Absent,
    /// Clocked in, `clock_out` not set yet.
    ClockedIn(TimeRecordAggregate),
    /// `clock_out` set and no open break. The next punch reads `clock_out` as a break start.
    ClosedPendingBreakDecision(TimeRecordAggregate),
    /// `clock_out` set and a break is open. The next punch reads `clock_out` as its end.
    OnBreak {
        record: TimeRecordAggregate,
        open_break_id: Uuid,
    },
}

impl AttendanceState {
    pub fn derive(record: Option<TimeRecordAggregate>) -> Self {
        let Some(record) = record else {
            return AttendanceState::Absent;
        };
        if record.record.clock_out.is_none() {
            return AttendanceState::ClockedIn(record);
        }
        match record.open_break().map(|entry| entry.id) {
            Some(open_break_id) => AttendanceState::OnBreak {
                record,
                open_break_id,
            },
            None => AttendanceState::ClosedPendingBreakDecision(record),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttendanceState::Absent => "absent",
            AttendanceState::ClockedIn(_) => "clocked_in",
            AttendanceState::ClosedPendingBreakDecision(_) => "closed_pending_break_decision",
            AttendanceState::OnBreak { .. } => "on_break",
        }
    }

    pub fn record(&self) -> Option<&TimeRecordAggregate> {
        match self {
            AttendanceState::Absent => None,
            AttendanceState::ClockedIn(record)
            | AttendanceState::ClosedPendingBreakDecision(record)
            | AttendanceState::OnBreak { record, .. } => Some(record),
        }
    }

    pub fn into_record(self) -> Option<TimeRecordAggregate> {
        match self {
            AttendanceState::Absent => None,
            AttendanceState::ClockedIn(record)
            | AttendanceState::ClosedPendingBreakDecision(record)
            | AttendanceState::OnBreak { record, .. } => Some(record),
        }
    }
}
