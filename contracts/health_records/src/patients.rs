use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::errors::ContractError;

// ── Storage keys ──────────────────────────────────────────────
const PATIENT: Symbol = symbol_short!("PATIENT");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_patient_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// A registered patient. Written exactly once at registration; the
/// demographic fields never change afterwards and there is no
/// de-registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub address: Address,
    pub name: String,
    pub blood_group: String,
    pub age: u32,
    pub registered: bool,
    pub registered_at: u64,
}

pub fn has_patient(env: &Env, identity: &Address) -> bool {
    let key = (PATIENT, identity.clone());
    env.storage().persistent().has(&key)
}

pub fn get_patient(env: &Env, identity: &Address) -> Option<Patient> {
    let key = (PATIENT, identity.clone());
    env.storage().persistent().get(&key)
}

/// Looks up a patient, mapping absence to `NotRegistered`.
pub fn require_patient(env: &Env, identity: &Address) -> Result<Patient, ContractError> {
    get_patient(env, identity).ok_or(ContractError::NotRegistered)
}

pub fn set_patient(env: &Env, patient: &Patient) {
    let key = (PATIENT, patient.address.clone());
    env.storage().persistent().set(&key, patient);
    extend_ttl_patient_key(env, &key);
}
