//! Operator credential for privileged operations.
//!
//! The sale has a single operator role, fixed at initialization. Privileged
//! entry points take the caller's address explicitly, require its
//! authorization, and check it against the stored credential.

use soroban_sdk::{contracttype, Address, Env};

use crate::Error;

#[contracttype]
enum AccessKey {
    Operator,
}

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&AccessKey::Operator, operator);
}

pub fn operator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::Operator)
}

/// Fails with `Unauthorized` unless `caller` is the stored operator,
/// or `NotInitialized` when no operator has been set yet.
pub fn require_operator(env: &Env, caller: &Address) -> Result<(), Error> {
    match operator(env) {
        Some(ref op) if op == caller => Ok(()),
        Some(_) => Err(Error::Unauthorized),
        None => Err(Error::NotInitialized),
    }
}
