//! # Whitelisted Token Sale Contract
//!
//! A fixed-supply token sale with a pre-approved participant set and a
//! bounded contribution window. Admitted participants deposit the payment
//! asset while the sale is open; once it closes, each deposit is converted
//! into sale tokens at the configured rate. Over-subscription is not
//! rejected at deposit time: it is resolved at settlement by a pro-rata
//! refund, so every contributor is treated proportionally rather than
//! first-come-first-served. A terminal sweep recovers whatever the ledger
//! still holds after settlement.
//!
//! Lifecycle: `init` → `admit`/`contribute` while `Open` → `claim` /
//! `distribute_to` once `Closed` → `sweep`.

#![no_std]

pub mod access;
pub mod events;
pub mod phase;
pub mod whitelist;

#[cfg(test)]
mod invariants;

use events::{
    emit_contribution_recorded, emit_excess_swept, emit_max_contribution_set,
    emit_participant_admitted, emit_participant_revoked, emit_per_address_cap_set,
    emit_rate_updated, emit_sale_initialized, emit_tokens_distributed, ContributionRecorded,
    ExcessSwept, MaxContributionSet, ParticipantAdmitted, ParticipantRevoked, PerAddressCapSet,
    RateUpdated, SaleInitialized, TokensDistributed,
};
use phase::Phase;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, token, Address, Env, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NotAdmitted = 4,
    WrongPhase = 5,
    ZeroAmount = 6,
    InvalidAmount = 7,
    CapExceeded = 8,
    AlreadySettled = 9,
    DistributionStarted = 10,
    Overflow = 11,
}

/// One participant's position in the deposit ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    /// Payment-asset units contributed while the sale was open.
    pub amount: i128,
    /// Set once settlement has paid this deposit out; a settled deposit can
    /// never be settled again.
    pub settled: bool,
}

#[contracttype]
pub enum DataKey {
    NativeToken,
    SaleToken,
    Rate,
    SupplyUnits,
    NativeCap,
    PerAddressCap,
    MaxContribution,
    OpeningTime,
    ClosingTime,
    ExtendedClosingTime,
    TotalContributed,
    TotalAllocated,
    DistributionStarted,
    Deposit(Address),
}

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale. Callable exactly once.
    ///
    /// `native_token` is the payment asset participants deposit;
    /// `sale_token` is the asset being sold. The contract must be funded
    /// with `supply_units` of the sale token before `opening_time`.
    /// The global payment cap is derived as `supply_units / rate` and is
    /// recomputed if the rate changes before the sale opens.
    pub fn init(
        env: Env,
        operator: Address,
        native_token: Address,
        sale_token: Address,
        rate: i128,
        supply_units: i128,
        opening_time: u64,
        closing_time: u64,
        extended_closing_time: Option<u64>,
    ) -> Result<(), Error> {
        operator.require_auth();

        if access::operator(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        if rate <= 0 || supply_units <= 0 {
            return Err(Error::InvalidAmount);
        }
        if opening_time >= closing_time {
            return Err(Error::InvalidAmount);
        }
        if let Some(extended) = extended_closing_time {
            if extended <= closing_time {
                return Err(Error::InvalidAmount);
            }
        }

        access::set_operator(&env, &operator);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        env.storage().instance().set(&DataKey::SaleToken, &sale_token);
        env.storage().instance().set(&DataKey::Rate, &rate);
        env.storage().instance().set(&DataKey::SupplyUnits, &supply_units);
        env.storage().instance().set(&DataKey::NativeCap, &(supply_units / rate));
        env.storage().instance().set(&DataKey::OpeningTime, &opening_time);
        env.storage().instance().set(&DataKey::ClosingTime, &closing_time);
        if let Some(extended) = extended_closing_time {
            env.storage()
                .instance()
                .set(&DataKey::ExtendedClosingTime, &extended);
        }
        env.storage().instance().set(&DataKey::TotalContributed, &0i128);
        env.storage().instance().set(&DataKey::TotalAllocated, &0i128);

        emit_sale_initialized(
            &env,
            SaleInitialized {
                operator,
                native_token,
                sale_token,
                rate,
                supply_units,
                opening_time,
                closing_time,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Admit a participant to the sale. Operator only. Idempotent.
    pub fn admit(env: Env, caller: Address, participant: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        admit_one(&env, &participant);
        Ok(())
    }

    /// Admit every address in a caller-supplied list. Operator only.
    pub fn admit_many(env: Env, caller: Address, participants: Vec<Address>) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        for participant in participants.iter() {
            admit_one(&env, &participant);
        }
        Ok(())
    }

    /// Remove a participant from the sale. Operator only.
    ///
    /// Any unsettled deposit is returned in full and the running total is
    /// reduced accordingly; a removed identity holds no residual claim.
    /// Removing an address that was never admitted is a no-op.
    pub fn revoke(env: Env, caller: Address, participant: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        if !whitelist::is_admitted(&env, &participant) {
            return Ok(());
        }
        whitelist::revoke(&env, &participant);

        let mut refunded: i128 = 0;
        let key = DataKey::Deposit(participant.clone());
        if let Some(deposit) = env.storage().persistent().get::<_, Deposit>(&key) {
            if !deposit.settled && deposit.amount > 0 {
                refunded = deposit.amount;
                let total: i128 = env
                    .storage()
                    .instance()
                    .get(&DataKey::TotalContributed)
                    .unwrap();
                let new_total = total.checked_sub(refunded).ok_or(Error::Overflow)?;

                // Clear the ledger before the refund leaves the contract.
                env.storage().persistent().remove(&key);
                env.storage()
                    .instance()
                    .set(&DataKey::TotalContributed, &new_total);

                native_token_client(&env).transfer(
                    &env.current_contract_address(),
                    &participant,
                    &refunded,
                );
            }
        }

        emit_participant_revoked(
            &env,
            ParticipantRevoked {
                participant,
                refunded,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Update the conversion rate. Operator only, and only while the sale is
    /// still `Pending`. Recomputes the derived global payment cap.
    pub fn update_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        if current_phase(&env) != Phase::Pending {
            return Err(Error::WrongPhase);
        }
        if new_rate <= 0 {
            return Err(Error::InvalidAmount);
        }

        let supply_units: i128 = env
            .storage()
            .instance()
            .get(&DataKey::SupplyUnits)
            .unwrap();
        let native_cap = supply_units / new_rate;
        env.storage().instance().set(&DataKey::Rate, &new_rate);
        env.storage().instance().set(&DataKey::NativeCap, &native_cap);

        emit_rate_updated(
            &env,
            RateUpdated {
                rate: new_rate,
                native_cap,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Bound the payment amount any single participant can be settled for.
    /// Operator only. May be rewritten until the first settlement occurs;
    /// the last value written wins and applies uniformly to all deposits.
    pub fn set_per_address_cap(env: Env, caller: Address, value: i128) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        if distribution_started(&env) {
            return Err(Error::DistributionStarted);
        }
        if value <= 0 {
            return Err(Error::InvalidAmount);
        }
        env.storage().instance().set(&DataKey::PerAddressCap, &value);

        emit_per_address_cap_set(
            &env,
            PerAddressCapSet {
                value,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Bound the payment amount any single participant may contribute,
    /// enforced at contribution time. Operator only; frozen once
    /// distribution has begun.
    pub fn set_max_contribution(env: Env, caller: Address, value: i128) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        if distribution_started(&env) {
            return Err(Error::DistributionStarted);
        }
        if value <= 0 {
            return Err(Error::InvalidAmount);
        }
        env.storage().instance().set(&DataKey::MaxContribution, &value);

        emit_max_contribution_set(
            &env,
            MaxContributionSet {
                value,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Contribute `amount` of the payment asset to the sale.
    ///
    /// Only admitted participants, only while the sale is `Open`. The global
    /// cap is deliberately not checked here: excess demand is accepted and
    /// resolved pro-rata at settlement.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), Error> {
        contributor.require_auth();
        require_init(&env)?;

        if !whitelist::is_admitted(&env, &contributor) {
            return Err(Error::NotAdmitted);
        }
        if current_phase(&env) != Phase::Open {
            return Err(Error::WrongPhase);
        }
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let key = DataKey::Deposit(contributor.clone());
        let mut deposit = env
            .storage()
            .persistent()
            .get::<_, Deposit>(&key)
            .unwrap_or(Deposit {
                amount: 0,
                settled: false,
            });
        let new_amount = deposit.amount.checked_add(amount).ok_or(Error::Overflow)?;
        if let Some(limit) = env
            .storage()
            .instance()
            .get::<_, i128>(&DataKey::MaxContribution)
        {
            if new_amount > limit {
                return Err(Error::CapExceeded);
            }
        }
        let total: i128 = env
            .storage()
            .instance()
            .get(&DataKey::TotalContributed)
            .unwrap();
        let new_total = total.checked_add(amount).ok_or(Error::Overflow)?;

        native_token_client(&env).transfer(
            &contributor,
            &env.current_contract_address(),
            &amount,
        );

        deposit.amount = new_amount;
        env.storage().persistent().set(&key, &deposit);
        env.storage()
            .instance()
            .set(&DataKey::TotalContributed, &new_total);

        emit_contribution_recorded(
            &env,
            ContributionRecorded {
                contributor,
                amount,
                total_contributed: new_total,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Settle the caller's own deposit: convert it to sale tokens and refund
    /// whatever the cap policy does not honor. Only once `Closed`, only once
    /// per participant.
    pub fn claim(env: Env, participant: Address) -> Result<(), Error> {
        participant.require_auth();
        require_init(&env)?;
        settle(&env, &participant)
    }

    /// Operator-driven settlement of any single participant, for batch
    /// distribution. Same eligibility rules as `claim`.
    pub fn distribute_to(env: Env, caller: Address, participant: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;
        settle(&env, &participant)
    }

    /// Move the contract's residual payment and sale-token balances to
    /// `beneficiary`. Operator only, only once `Closed`. Calling it with
    /// nothing left to move succeeds and moves nothing.
    pub fn sweep(env: Env, caller: Address, beneficiary: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        if current_phase(&env) != Phase::Closed {
            return Err(Error::WrongPhase);
        }

        let contract = env.current_contract_address();
        let native = native_token_client(&env);
        let sale = sale_token_client(&env);
        let native_amount = native.balance(&contract);
        let token_amount = sale.balance(&contract);

        if native_amount > 0 {
            native.transfer(&contract, &beneficiary, &native_amount);
        }
        if token_amount > 0 {
            sale.transfer(&contract, &beneficiary, &token_amount);
        }

        emit_excess_swept(
            &env,
            ExcessSwept {
                beneficiary,
                native_amount,
                token_amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Whether `participant` is currently admitted.
    pub fn is_admitted(env: Env, participant: Address) -> bool {
        whitelist::is_admitted(&env, &participant)
    }

    /// The participant's recorded contribution, zero if none.
    pub fn get_contribution(env: Env, participant: Address) -> i128 {
        env.storage()
            .persistent()
            .get::<_, Deposit>(&DataKey::Deposit(participant))
            .map_or(0, |deposit| deposit.amount)
    }

    /// Whether the participant's deposit has already been settled.
    pub fn has_settled(env: Env, participant: Address) -> bool {
        env.storage()
            .persistent()
            .get::<_, Deposit>(&DataKey::Deposit(participant))
            .map_or(false, |deposit| deposit.settled)
    }

    pub fn get_rate(env: Env) -> Result<i128, Error> {
        require_init(&env)?;
        Ok(env.storage().instance().get(&DataKey::Rate).unwrap())
    }

    /// The global payment cap, `supply_units / rate`.
    pub fn get_native_cap(env: Env) -> Result<i128, Error> {
        require_init(&env)?;
        Ok(env.storage().instance().get(&DataKey::NativeCap).unwrap())
    }

    pub fn get_supply_units(env: Env) -> Result<i128, Error> {
        require_init(&env)?;
        Ok(env.storage().instance().get(&DataKey::SupplyUnits).unwrap())
    }

    pub fn get_per_address_cap(env: Env) -> Option<i128> {
        env.storage().instance().get(&DataKey::PerAddressCap)
    }

    pub fn get_max_contribution(env: Env) -> Option<i128> {
        env.storage().instance().get(&DataKey::MaxContribution)
    }

    pub fn get_total_contributed(env: Env) -> Result<i128, Error> {
        require_init(&env)?;
        Ok(env
            .storage()
            .instance()
            .get(&DataKey::TotalContributed)
            .unwrap())
    }

    /// Sale tokens already transferred out by settlement.
    pub fn get_total_allocated(env: Env) -> Result<i128, Error> {
        require_init(&env)?;
        Ok(env
            .storage()
            .instance()
            .get(&DataKey::TotalAllocated)
            .unwrap())
    }

    /// The sale's current phase, derived from the ledger clock.
    pub fn get_phase(env: Env) -> Result<Phase, Error> {
        require_init(&env)?;
        Ok(current_phase(&env))
    }

    /// view function to get the contract's payment-asset balance
    pub fn get_native_balance(env: Env) -> Result<i128, Error> {
        require_init(&env)?;
        Ok(native_token_client(&env).balance(&env.current_contract_address()))
    }

    /// view function to get the contract's sale-token balance
    pub fn get_token_balance(env: Env) -> Result<i128, Error> {
        require_init(&env)?;
        Ok(sale_token_client(&env).balance(&env.current_contract_address()))
    }
}

fn require_init(env: &Env) -> Result<(), Error> {
    if access::operator(env).is_none() {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

fn current_phase(env: &Env) -> Phase {
    let opening_time: u64 = env.storage().instance().get(&DataKey::OpeningTime).unwrap();
    let closing_time: u64 = env.storage().instance().get(&DataKey::ClosingTime).unwrap();
    let extended_closing_time: Option<u64> = env
        .storage()
        .instance()
        .get(&DataKey::ExtendedClosingTime);
    phase::phase_at(
        env.ledger().timestamp(),
        opening_time,
        closing_time,
        extended_closing_time,
    )
}

fn distribution_started(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::DistributionStarted)
        .unwrap_or(false)
}

fn native_token_client(env: &Env) -> token::Client<'_> {
    let token_addr: Address = env.storage().instance().get(&DataKey::NativeToken).unwrap();
    token::Client::new(env, &token_addr)
}

fn sale_token_client(env: &Env) -> token::Client<'_> {
    let token_addr: Address = env.storage().instance().get(&DataKey::SaleToken).unwrap();
    token::Client::new(env, &token_addr)
}

fn admit_one(env: &Env, participant: &Address) {
    whitelist::admit(env, participant);
    emit_participant_admitted(
        env,
        ParticipantAdmitted {
            participant: participant.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

/// Convert one deposit into sale tokens plus refund and pay both out.
///
/// The entitlement is `effective * rate`, where `effective` is the slice of
/// the deposit the cap policy honors:
/// - a per-address cap, when set, clamps the deposit directly;
/// - otherwise, under-subscription honors the full deposit;
/// - otherwise the deposit is scaled to `native_cap * amount / total`
///   (floor), so the honored slices of all participants sum to at most the
///   cap and allocations can never outrun the reserved supply.
fn settle(env: &Env, participant: &Address) -> Result<(), Error> {
    if current_phase(env) != Phase::Closed {
        return Err(Error::WrongPhase);
    }
    if !whitelist::is_admitted(env, participant) {
        return Err(Error::NotAdmitted);
    }

    let key = DataKey::Deposit(participant.clone());
    let mut deposit = env
        .storage()
        .persistent()
        .get::<_, Deposit>(&key)
        .unwrap_or(Deposit {
            amount: 0,
            settled: false,
        });
    if deposit.settled {
        return Err(Error::AlreadySettled);
    }
    if deposit.amount == 0 {
        return Err(Error::ZeroAmount);
    }

    let contributed = deposit.amount;
    let rate: i128 = env.storage().instance().get(&DataKey::Rate).unwrap();
    let native_cap: i128 = env.storage().instance().get(&DataKey::NativeCap).unwrap();
    let total: i128 = env
        .storage()
        .instance()
        .get(&DataKey::TotalContributed)
        .unwrap();
    let per_address_cap: Option<i128> = env.storage().instance().get(&DataKey::PerAddressCap);

    let effective = match per_address_cap {
        Some(cap) if contributed > cap => cap,
        Some(_) => contributed,
        None if total <= native_cap => contributed,
        None => native_cap
            .checked_mul(contributed)
            .ok_or(Error::Overflow)?
            / total,
    };
    let refund = contributed - effective;
    let tokens = effective.checked_mul(rate).ok_or(Error::Overflow)?;

    let total_allocated: i128 = env
        .storage()
        .instance()
        .get(&DataKey::TotalAllocated)
        .unwrap();
    let new_total_allocated = total_allocated.checked_add(tokens).ok_or(Error::Overflow)?;

    // Settle the ledger before anything leaves the contract; a reentrant
    // call must observe this deposit as already spent.
    deposit.settled = true;
    env.storage().persistent().set(&key, &deposit);
    env.storage()
        .instance()
        .set(&DataKey::TotalAllocated, &new_total_allocated);
    env.storage()
        .instance()
        .set(&DataKey::DistributionStarted, &true);

    let contract = env.current_contract_address();
    sale_token_client(env).transfer(&contract, participant, &tokens);
    if refund > 0 {
        native_token_client(env).transfer(&contract, participant, &refund);
    }

    emit_tokens_distributed(
        env,
        TokensDistributed {
            participant: participant.clone(),
            tokens,
            refund,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(())
}
