//! Permission edges and the shared access predicate.
//!
//! Every read of patient-owned data (single records, record lists, record
//! counts, patient info) is authorized by [`can_view`] and nothing else.
//! Keeping the rule in one function is what prevents enforcement drift
//! between call sites.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::providers;

// ── Storage keys ──────────────────────────────────────────────
const ACCESS: Symbol = symbol_short!("ACCESS");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_access_key(env: &Env, key: &(Symbol, Address, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Whether the directed edge (owner → grantee) is active.
pub fn has_grant(env: &Env, owner: &Address, grantee: &Address) -> bool {
    let key = (ACCESS, owner.clone(), grantee.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_grant(env: &Env, owner: &Address, grantee: &Address) {
    let key = (ACCESS, owner.clone(), grantee.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl_access_key(env, &key);
}

/// Deactivates the edge. Revocation is immediate for all subsequent reads.
pub fn clear_grant(env: &Env, owner: &Address, grantee: &Address) {
    let key = (ACCESS, owner.clone(), grantee.clone());
    env.storage().persistent().remove(&key);
}

/// The single authorization predicate for patient-owned data.
///
/// `person` may read `patient`'s records iff they are the patient, hold an
/// active grant from the patient, or are an authorized provider.
pub fn can_view(env: &Env, patient: &Address, person: &Address) -> bool {
    person == patient || has_grant(env, patient, person) || providers::is_provider(env, person)
}
