// Pure decision function for a punch.
//
// Responsibilities
// - Refuse users that are not linked to a company.
// - Pick the single transition that fits the current AttendanceState. The caller never says
//   what the punch means.
// - Never perform input or output.

use crate::modules::time_records::core::state::AttendanceState;
use crate::modules::time_records::core::transitions::PunchTransition;
use crate::modules::time_records::use_cases::punch::command::Punch;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PunchRejected {
    #[error("user is not linked to a company")]
    NotLinkedToCompany,
}

impl From<PunchRejected> for ApplicationError {
    fn from(rejected: PunchRejected) -> Self {
        ApplicationError::PermissionDenied(rejected.to_string())
    }
}

pub fn decide_punch(
    state: &AttendanceState,
    command: Punch,
) -> Result<PunchTransition, PunchRejected> {
    let company_id = command
        .company_id
        .ok_or(PunchRejected::NotLinkedToCompany)?;

    Ok(match state {
        AttendanceState::Absent => PunchTransition::ClockIn {
            record_id: command.fresh_id,
            user_id: command.user_id,
            company_id,
            at: command.at,
        },
        AttendanceState::ClockedIn(_) => PunchTransition::ClockOut { at: command.at },
        AttendanceState::ClosedPendingBreakDecision(_) => PunchTransition::StartBreak {
            break_id: command.fresh_id,
            at: command.at,
        },
        AttendanceState::OnBreak { .. } => PunchTransition::EndBreak { at: command.at },
    })
}
