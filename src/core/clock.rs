use chrono::{NaiveDate, Utc};

/// Current calendar day in UTC.
///
/// Status derivation is a pure function of a caller-supplied "today" so it
/// stays deterministic under test; this is the single place production code
/// reads the wall clock to obtain that snapshot. One snapshot must cover an
/// entire derivation pass: comparing different installments of the same plan
/// against different instants would break the one-status-per-installment
/// invariant.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
