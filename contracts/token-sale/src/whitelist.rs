//! Admission set for sale participants.
//!
//! Each admitted address gets its own persistent entry, so membership checks
//! and mutations touch exactly one key and the set never needs to be
//! iterated. Batch admission walks only the caller-supplied list.

use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
enum WhitelistKey {
    Admitted(Address),
}

pub fn admit(env: &Env, participant: &Address) {
    env.storage()
        .persistent()
        .set(&WhitelistKey::Admitted(participant.clone()), &true);
}

pub fn revoke(env: &Env, participant: &Address) {
    env.storage()
        .persistent()
        .remove(&WhitelistKey::Admitted(participant.clone()));
}

pub fn is_admitted(env: &Env, participant: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&WhitelistKey::Admitted(participant.clone()))
        .unwrap_or(false)
}
