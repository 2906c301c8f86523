// Command data type for a punch.
//
// - `fresh_id` names whatever the punch creates: the day's record on clock-in, or the break on a
//   break start. Generated by the caller so the decider stays pure.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Punch {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub at: DateTime<Utc>,
    pub fresh_id: Uuid,
}
