//! Ledger-clock manipulation helpers.
//!
//! Provides functions to move the ledger clock across the sale's phase
//! boundaries in tests.

use soroban_sdk::{testutils::Ledger, Env};

/// Gets the current ledger timestamp.
///
/// # Arguments
/// * `env` - The contract environment
///
/// # Returns
/// The current timestamp (u64)
pub fn current_time(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Advances the ledger timestamp by the specified number of seconds.
///
/// # Arguments
/// * `env` - The contract environment
/// * `seconds` - Number of seconds to advance
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::Env;
/// # use test_utils::time::advance_time;
/// # let env = Env::default();
/// advance_time(&env, 3600); // Advance by 1 hour
/// ```
pub fn advance_time(env: &Env, seconds: u64) {
    let current = env.ledger().timestamp();
    env.ledger().set_timestamp(current + seconds);
}

/// Sets the ledger timestamp to a specific value.
///
/// # Arguments
/// * `env` - The contract environment
/// * `timestamp` - The timestamp to set
pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set_timestamp(timestamp);
}

/// Builds an (opening, closing) window starting `lead` seconds from now and
/// lasting `duration` seconds.
///
/// # Arguments
/// * `env` - The contract environment
/// * `lead` - Seconds until the window opens
/// * `duration` - Length of the window in seconds
///
/// # Returns
/// The (opening_time, closing_time) pair
pub fn sale_window(env: &Env, lead: u64, duration: u64) -> (u64, u64) {
    let opening = env.ledger().timestamp() + lead;
    (opening, opening + duration)
}
