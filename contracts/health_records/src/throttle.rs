//! Per-caller read throttle.
//!
//! Persists one `last_read` timestamp per caller and delegates the decision
//! to the pure [`CooldownState`] helper shared with off-chain tooling. The
//! interval is configuration, not a constant: the admin can retune it via
//! `set_read_cooldown`, and zero disables the throttle entirely.

use medledger_common::CooldownState;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;

// ── Storage keys ──────────────────────────────────────────────
const LAST_READ: Symbol = symbol_short!("LAST_READ");
const COOLDOWN: Symbol = symbol_short!("COOLDOWN");

/// Default minimum interval between gated reads, in seconds. One second is
/// the coarsest granularity the ledger clock resolves.
pub const DEFAULT_READ_COOLDOWN_SECS: u64 = 1;

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_last_read_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn read_cooldown(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&COOLDOWN)
        .unwrap_or(DEFAULT_READ_COOLDOWN_SECS)
}

pub fn set_read_cooldown(env: &Env, interval_secs: u64) {
    env.storage().instance().set(&COOLDOWN, &interval_secs);
}

/// Enforces the minimum interval between gated reads for `caller`.
///
/// On success the caller's window advances to the current ledger timestamp.
/// A refusal aborts the call, so the stored state is only ever advanced by
/// reads that actually went through.
pub fn enforce(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let interval = read_cooldown(env);
    if interval == 0 {
        return Ok(());
    }

    let key = (LAST_READ, caller.clone());
    let mut state = match env.storage().persistent().get::<_, u64>(&key) {
        Some(last) => CooldownState::since(last),
        None => CooldownState::new(),
    };

    if !state.try_read(env.ledger().timestamp(), interval) {
        return Err(ContractError::RateLimited);
    }

    if let Some(last) = state.last_read() {
        env.storage().persistent().set(&key, &last);
        extend_ttl_last_read_key(env, &key);
    }

    Ok(())
}
