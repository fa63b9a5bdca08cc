use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug)]
pub struct SaleInitialized {
    pub operator: Address,
    pub native_token: Address,
    pub sale_token: Address,
    pub rate: i128,
    pub supply_units: i128,
    pub opening_time: u64,
    pub closing_time: u64,
    pub timestamp: u64,
}

pub fn emit_sale_initialized(env: &Env, event: SaleInitialized) {
    env.events().publish((symbol_short!("init"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ParticipantAdmitted {
    pub participant: Address,
    pub timestamp: u64,
}

pub fn emit_participant_admitted(env: &Env, event: ParticipantAdmitted) {
    env.events().publish((symbol_short!("admit"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ParticipantRevoked {
    pub participant: Address,
    /// Deposit returned alongside the removal; zero when nothing was held.
    pub refunded: i128,
    pub timestamp: u64,
}

pub fn emit_participant_revoked(env: &Env, event: ParticipantRevoked) {
    env.events().publish((symbol_short!("revoke"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RateUpdated {
    pub rate: i128,
    pub native_cap: i128,
    pub timestamp: u64,
}

pub fn emit_rate_updated(env: &Env, event: RateUpdated) {
    env.events().publish((symbol_short!("rate"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PerAddressCapSet {
    pub value: i128,
    pub timestamp: u64,
}

pub fn emit_per_address_cap_set(env: &Env, event: PerAddressCapSet) {
    env.events().publish((symbol_short!("cap_addr"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct MaxContributionSet {
    pub value: i128,
    pub timestamp: u64,
}

pub fn emit_max_contribution_set(env: &Env, event: MaxContributionSet) {
    env.events().publish((symbol_short!("cap_in"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ContributionRecorded {
    pub contributor: Address,
    pub amount: i128,
    /// Running aggregate after this contribution.
    pub total_contributed: i128,
    pub timestamp: u64,
}

pub fn emit_contribution_recorded(env: &Env, event: ContributionRecorded) {
    env.events().publish((symbol_short!("deposit"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TokensDistributed {
    pub participant: Address,
    pub tokens: i128,
    pub refund: i128,
    pub timestamp: u64,
}

pub fn emit_tokens_distributed(env: &Env, event: TokensDistributed) {
    env.events().publish((symbol_short!("dist"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ExcessSwept {
    pub beneficiary: Address,
    pub native_amount: i128,
    pub token_amount: i128,
    pub timestamp: u64,
}

pub fn emit_excess_swept(env: &Env, event: ExcessSwept) {
    env.events().publish((symbol_short!("swept"),), event);
}
