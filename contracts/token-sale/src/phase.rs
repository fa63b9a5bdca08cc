use soroban_sdk::contracttype;

/// Lifecycle phase of the sale, derived from the ledger clock.
///
/// Contributions are accepted only while `Open`; distribution and the final
/// sweep only once `Closed`. The phase is never stored, so it cannot drift
/// from the configured boundaries.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Pending,
    Open,
    Closed,
}

/// The closing boundary actually in force: the extension wins only when it
/// lies beyond the base closing time.
pub fn effective_closing(closing_time: u64, extended_closing_time: Option<u64>) -> u64 {
    match extended_closing_time {
        Some(extended) if extended > closing_time => extended,
        _ => closing_time,
    }
}

/// Derive the phase at `now` from the configured boundaries.
pub fn phase_at(
    now: u64,
    opening_time: u64,
    closing_time: u64,
    extended_closing_time: Option<u64>,
) -> Phase {
    if now < opening_time {
        Phase::Pending
    } else if now < effective_closing(closing_time, extended_closing_time) {
        Phase::Open
    } else {
        Phase::Closed
    }
}
