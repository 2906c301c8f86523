// Shared test fixtures: fixed identifiers, timestamps and builders.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub mod apps;
pub mod records;
pub mod users;

pub const COMPANY_A: Uuid = Uuid::from_u128(0x0190a5e4_0000_7000_8000_0000000000c1);
pub const COMPANY_B: Uuid = Uuid::from_u128(0x0190a5e4_0000_7000_8000_0000000000c2);
pub const USER_U: Uuid = Uuid::from_u128(0x0190a5e4_0000_7000_8000_000000000001);
pub const USER_V: Uuid = Uuid::from_u128(0x0190a5e4_0000_7000_8000_000000000002);
pub const ADMIN_A: Uuid = Uuid::from_u128(0x0190a5e4_0000_7000_8000_0000000000a1);
pub const ADMIN_B: Uuid = Uuid::from_u128(0x0190a5e4_0000_7000_8000_0000000000a2);

/// January `date`, 2024 at `hour:minute` UTC.
pub fn day(date: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, date, hour, minute, 0).unwrap()
}
