use crate::storage_types::{SECONDS_PER_MINUTE, STROOPS_PER_XLM};

/// Add two ledger amounts, `None` on overflow
pub fn add_amount(a: i128, b: i128) -> Option<i128> {
    a.checked_add(b)
}

/// Subtract two ledger amounts, `None` on overflow
pub fn sub_amount(a: i128, b: i128) -> Option<i128> {
    a.checked_sub(b)
}

/// Timestamp `duration_seconds` after `now`
pub fn deadline_from(now: u64, duration_seconds: u64) -> Option<u64> {
    now.checked_add(duration_seconds)
}

/// Check if `deadline` has been reached at `now`
pub fn has_passed(now: u64, deadline: u64) -> bool {
    now >= deadline
}

/// Seconds remaining until `deadline`, zero once it has passed
pub fn seconds_until(now: u64, deadline: u64) -> u64 {
    deadline.saturating_sub(now)
}

/// Convert minutes to seconds
pub fn minutes_to_seconds(minutes: u64) -> Option<u64> {
    minutes.checked_mul(SECONDS_PER_MINUTE)
}

/// Convert a whole-unit amount to base units of a token with `decimals`
pub fn to_base_units(whole: i128, decimals: u32) -> Option<i128> {
    10i128.checked_pow(decimals).and_then(|scale| whole.checked_mul(scale))
}

/// Convert XLM to stroops
pub fn xlm_to_stroops(xlm: i128) -> Option<i128> {
    xlm.checked_mul(STROOPS_PER_XLM)
}
