use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

use crate::errors::ContractError;

// ── Storage keys ──────────────────────────────────────────────
const RECORD: Symbol = symbol_short!("RECORD");
const PAT_REC: Symbol = symbol_short!("PAT_REC");
const REC_CTR: Symbol = symbol_short!("REC_CTR");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_record_key(env: &Env, key: &(Symbol, u64)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_index_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// An immutable ledger entry. Demographics are snapshotted from the patient
/// at creation time; there is no update or delete path.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthRecord {
    pub id: u64,
    pub patient: Address,
    pub name: String,
    pub age: u32,
    pub blood_group: String,
    pub diagnosis: String,
    pub treatment: String,
    pub created_at: u64,
    pub author: Address,
}

/// Allocates the next record id. Ids are dense, 1-based and never reused.
pub fn next_record_id(env: &Env) -> u64 {
    let next: u64 = env
        .storage()
        .instance()
        .get(&REC_CTR)
        .unwrap_or(0u64)
        .saturating_add(1);
    env.storage().instance().set(&REC_CTR, &next);
    next
}

/// Total number of records allocated so far.
pub fn record_count(env: &Env) -> u64 {
    env.storage().instance().get(&REC_CTR).unwrap_or(0)
}

pub fn get_record(env: &Env, record_id: u64) -> Option<HealthRecord> {
    let key = (RECORD, record_id);
    env.storage().persistent().get(&key)
}

/// Looks up a record, mapping an out-of-range or dangling id to
/// `InvalidRecordId`.
pub fn require_record(env: &Env, record_id: u64) -> Result<HealthRecord, ContractError> {
    get_record(env, record_id).ok_or(ContractError::InvalidRecordId)
}

pub fn set_record(env: &Env, record: &HealthRecord) {
    let key = (RECORD, record.id);
    env.storage().persistent().set(&key, record);
    extend_ttl_record_key(env, &key);
}

/// Record ids owned by a patient, in creation order.
pub fn patient_record_ids(env: &Env, patient: &Address) -> Vec<u64> {
    let key = (PAT_REC, patient.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

/// Appends a record id to the patient's index. The index is append-only.
pub fn append_patient_record(env: &Env, patient: &Address, record_id: u64) {
    let key = (PAT_REC, patient.clone());
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    ids.push_back(record_id);
    env.storage().persistent().set(&key, &ids);
    extend_ttl_index_key(env, &key);
}
