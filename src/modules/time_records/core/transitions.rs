// The four punch transitions, one per AttendanceState. Produced by the punch decider and applied
// by evolve.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchTransition {
    /// Absent -> ClockedIn. Creates the day's record with `clock_in = at`.
    ClockIn {
        record_id: Uuid,
        user_id: Uuid,
        company_id: Uuid,
        at: DateTime<Utc>,
    },
    /// ClockedIn -> ClosedPendingBreakDecision. Sets `clock_out = at`.
    ClockOut { at: DateTime<Utc> },
    /// ClosedPendingBreakDecision -> OnBreak. Opens a break at the previous `clock_out`, then
    /// sets `clock_out = at`.
    StartBreak { break_id: Uuid, at: DateTime<Utc> },
    /// OnBreak -> ClosedPendingBreakDecision. Ends the open break at the previous `clock_out`,
    /// then sets `clock_out = at`.
    EndBreak { at: DateTime<Utc> },
}

impl PunchTransition {
    pub fn name(&self) -> &'static str {
        match self {
            PunchTransition::ClockIn { .. } => "clock_in",
            PunchTransition::ClockOut { .. } => "clock_out",
            PunchTransition::StartBreak { .. } => "start_break",
            PunchTransition::EndBreak { .. } => "end_break",
        }
    }
}
