use crate::modules::time_records::core::record::{BreakRecord, TimeRecord, TimeRecordAggregate};
use crate::modules::time_records::core::state::AttendanceState;
use crate::modules::time_records::core::transitions::PunchTransition;

pub fn evolve(state: AttendanceState, transition: PunchTransition) -> AttendanceState {
    match (state, transition) {
        (
            AttendanceState::Absent,
            PunchTransition::ClockIn {
                record_id,
                user_id,
                company_id,
                at,
            },
        ) => AttendanceState::ClockedIn(TimeRecordAggregate::new(TimeRecord::open(
            record_id, user_id, company_id, at,
        ))),
        (AttendanceState::ClockedIn(mut record), PunchTransition::ClockOut { at }) => {
            record.record.clock_out = Some(at);
            AttendanceState::derive(Some(record))
        }
        (
            AttendanceState::ClosedPendingBreakDecision(mut record),
            PunchTransition::StartBreak { break_id, at },
        ) => {
            if let Some(started_at) = record.record.clock_out {
                record.insert_break(BreakRecord {
                    id: break_id,
                    time_record_id: record.id(),
                    started_at,
                    ended_at: None,
                    registered_by_id: None,
                });
            }
            record.record.clock_out = Some(at);
            AttendanceState::derive(Some(record))
        }
        (
            AttendanceState::OnBreak {
                mut record,
                open_break_id,
            },
            PunchTransition::EndBreak { at },
        ) => {
            if let Some(ended_at) = record.record.clock_out {
                record.close_break(open_break_id, ended_at);
            }
            record.record.clock_out = Some(at);
            AttendanceState::derive(Some(record))
        }
        (state, _) => state,
    }
}
