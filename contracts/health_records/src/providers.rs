use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage keys ──────────────────────────────────────────────
const PROVIDER: Symbol = symbol_short!("PROVIDER");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_provider_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Whether the identity is currently in the provider set. Provider status
/// is not sensitive; this is an open lookup.
pub fn is_provider(env: &Env, identity: &Address) -> bool {
    let key = (PROVIDER, identity.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn add_provider(env: &Env, identity: &Address) {
    let key = (PROVIDER, identity.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl_provider_key(env, &key);
}

/// Removes the identity from the provider set. The admin entry must never
/// reach this function; the contract guards it with `CannotRevokeAdmin`.
pub fn remove_provider(env: &Env, identity: &Address) {
    let key = (PROVIDER, identity.clone());
    env.storage().persistent().remove(&key);
}
