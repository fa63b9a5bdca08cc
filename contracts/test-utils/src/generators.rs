//! Test data generators.
//!
//! Provides functions to generate common sale test data values.

use soroban_sdk::{testutils::Address as _, Address, Env};

/// Generates multiple participant addresses.
///
/// # Arguments
/// * `env` - The contract environment
/// * `count` - Number of addresses to generate
///
/// # Returns
/// A vector of addresses
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::Env;
/// # use test_utils::generators::generate_participants;
/// # let env = Env::default();
/// let participants = generate_participants(&env, 5);
/// ```
pub fn generate_participants(env: &Env, count: u32) -> Vec<Address> {
    (0..count).map(|_| Address::generate(env)).collect()
}

/// Generates a contribution amount.
///
/// # Arguments
/// * `base` - Base amount
/// * `multiplier` - Optional multiplier
///
/// # Returns
/// An amount (i128)
pub fn generate_amount(base: i128, multiplier: Option<i128>) -> i128 {
    base * multiplier.unwrap_or(1)
}

/// The conversion rate most tests run the sale at (10,000 sale units per
/// payment unit).
pub fn default_rate() -> i128 {
    10_000
}

/// A reserved supply that yields a global cap of 1,000,000 payment units at
/// [`default_rate`].
pub fn default_supply() -> i128 {
    10_000_000_000
}

/// A standard single contribution (1000).
pub fn standard_contribution() -> i128 {
    1_000
}

/// A small contribution (100).
pub fn small_contribution() -> i128 {
    100
}

/// A large contribution (1,000,000).
pub fn large_contribution() -> i128 {
    1_000_000
}
