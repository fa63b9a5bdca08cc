//! Assertion utilities for common test scenarios.
//!
//! Provides helper functions for common assertions in sale contract tests.

use soroban_sdk::{token, Address};
use token_sale::TokenSaleContractClient;

/// Asserts that a token balance matches the expected value.
///
/// # Arguments
/// * `token_client` - The token client
/// * `address` - The address to check
/// * `expected_balance` - The expected balance
///
/// # Panics
/// Panics if the balance doesn't match the expected value.
pub fn assert_balance(token_client: &token::Client, address: &Address, expected_balance: i128) {
    let balance = token_client.balance(address);
    assert_eq!(
        balance, expected_balance,
        "Expected address {:?} to have balance {}, but got {}",
        address, expected_balance, balance
    );
}

/// Asserts that balances match expected values after a transaction.
///
/// # Arguments
/// * `token_client` - The token client
/// * `expected_balances` - A slice of (address, expected_balance) tuples
///
/// # Panics
/// Panics if any balance doesn't match the expected value.
pub fn assert_balances(token_client: &token::Client, expected_balances: &[(&Address, i128)]) {
    for (address, expected_balance) in expected_balances {
        assert_balance(token_client, address, *expected_balance);
    }
}

/// Asserts that a participant's recorded contribution matches.
///
/// # Arguments
/// * `sale` - The sale contract client
/// * `participant` - The participant to check
/// * `expected` - The expected recorded contribution
pub fn assert_contribution(
    sale: &TokenSaleContractClient,
    participant: &Address,
    expected: i128,
) {
    let recorded = sale.get_contribution(participant);
    assert_eq!(
        recorded, expected,
        "Expected participant {:?} to have contribution {}, but got {}",
        participant, expected, recorded
    );
}

/// Asserts a participant's admission status.
///
/// # Arguments
/// * `sale` - The sale contract client
/// * `participant` - The participant to check
/// * `expected` - Whether the participant should be admitted
pub fn assert_admitted(sale: &TokenSaleContractClient, participant: &Address, expected: bool) {
    let admitted = sale.is_admitted(participant);
    assert_eq!(
        admitted, expected,
        "Expected is_admitted({:?}) to be {}, but got {}",
        participant, expected, admitted
    );
}

/// Asserts whether a participant's deposit has been settled.
///
/// # Arguments
/// * `sale` - The sale contract client
/// * `participant` - The participant to check
/// * `expected` - Whether the deposit should be settled
pub fn assert_settled(sale: &TokenSaleContractClient, participant: &Address, expected: bool) {
    let settled = sale.has_settled(participant);
    assert_eq!(
        settled, expected,
        "Expected has_settled({:?}) to be {}, but got {}",
        participant, expected, settled
    );
}
