// Invariant checkers for the token sale contract.
// Helper assertions used by the behavioral tests after state-changing operations.
use crate::TokenSaleContractClient;
use soroban_sdk::token;

/// Invariant I1: Supply Bound
/// The sale never allocates more tokens than the supply reserved for it.
pub fn check_supply_bound(sale: &TokenSaleContractClient) {
    let allocated = sale.get_total_allocated();
    let supply = sale.get_supply_units();
    assert!(
        allocated <= supply,
        "Invariant I1 violated: total_allocated ({}) > supply_units ({})",
        allocated,
        supply
    );
}

/// Invariant I2: Settlement Conservation
/// A settled deposit splits exactly into an honored slice and a refund:
/// tokens == (contributed - refund) * rate.
pub fn check_settlement_conservation(contributed: i128, tokens: i128, refund: i128, rate: i128) {
    assert!(
        refund >= 0 && refund <= contributed,
        "Invariant I2 violated: refund ({}) outside [0, contributed ({})]",
        refund,
        contributed
    );
    assert_eq!(
        tokens,
        (contributed - refund) * rate,
        "Invariant I2 violated: tokens ({}) != (contributed ({}) - refund ({})) * rate ({})",
        tokens,
        contributed,
        refund,
        rate
    );
}

/// Invariant I3: Proportional Fairness
/// In the pro-rata branch every participant is refunded the same fraction of
/// their deposit, up to integer rounding: cross-multiplied refunds of any
/// two participants differ by less than the larger deposit.
pub fn check_proportional_refunds(settlements: &[(i128, i128)]) {
    for (i, &(contributed_i, refund_i)) in settlements.iter().enumerate() {
        for &(contributed_j, refund_j) in settlements.iter().skip(i + 1) {
            let lhs = refund_i * contributed_j;
            let rhs = refund_j * contributed_i;
            let tolerance = contributed_i.max(contributed_j);
            assert!(
                (lhs - rhs).abs() < tolerance,
                "Invariant I3 violated: refunds {} and {} not proportional to deposits {} and {}",
                refund_i,
                refund_j,
                contributed_i,
                contributed_j
            );
        }
    }
}

/// Invariant I4: Native Backing
/// While no refunds have gone out, the contract's payment-asset balance
/// matches the recorded running total exactly.
pub fn check_native_backing(sale: &TokenSaleContractClient, native: &token::Client) {
    let held = native.balance(&sale.address);
    let recorded = sale.get_total_contributed();
    assert_eq!(
        held, recorded,
        "Invariant I4 violated: contract holds {} native units but ledger records {}",
        held, recorded
    );
}

/// Invariant I5: Drained After Sweep
/// Once every eligible deposit has settled and the sweep has run, the
/// contract holds nothing of either asset.
pub fn check_drained(sale: &TokenSaleContractClient) {
    let native = sale.get_native_balance();
    let tokens = sale.get_token_balance();
    assert_eq!(
        native, 0,
        "Invariant I5 violated: residual native balance {} after sweep",
        native
    );
    assert_eq!(
        tokens, 0,
        "Invariant I5 violated: residual token balance {} after sweep",
        tokens
    );
}

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn conservation_checker_accepts_exact_split() {
        check_settlement_conservation(10_000, 60_000_000, 4_000, 10_000);
    }

    #[test]
    #[should_panic(expected = "Invariant I2 violated")]
    fn conservation_checker_rejects_bad_split() {
        check_settlement_conservation(10_000, 60_000_000, 4_001, 10_000);
    }

    #[test]
    fn fairness_checker_accepts_proportional_refunds() {
        // 40% refund across unequal deposits
        check_proportional_refunds(&[(1_000, 400), (2_000, 800), (5_000, 2_000)]);
    }

    #[test]
    fn fairness_checker_tolerates_rounding() {
        // one unit of floor rounding on the middle deposit
        check_proportional_refunds(&[(1_000, 400), (2_001, 800), (5_000, 2_000)]);
    }

    #[test]
    #[should_panic(expected = "Invariant I3 violated")]
    fn fairness_checker_rejects_skewed_refunds() {
        check_proportional_refunds(&[(1_000, 400), (1_000, 900)]);
    }
}
