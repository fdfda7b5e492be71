use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub read_cooldown_secs: u64,
    pub timestamp: u64,
}

/// Event published when an identity registers as a patient.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient: Address,
    pub name: String,
    pub timestamp: u64,
}

/// Event published when a provider adds a health record.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub record_id: u64,
    pub patient: Address,
    pub author: Address,
    pub timestamp: u64,
}

/// Event published when a patient grants read access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub owner: Address,
    pub grantee: Address,
    pub timestamp: u64,
}

/// Event published when a patient revokes read access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub owner: Address,
    pub grantee: Address,
    pub timestamp: u64,
}

/// Event published when the admin authorizes a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAuthorizedEvent {
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when the admin revokes a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRevokedEvent {
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published on every break-glass read. This is the one read path
/// that bypasses patient consent, so it must always leave a trace.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyAccessedEvent {
    pub record_id: u64,
    pub patient: Address,
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when a read is refused by the shared access predicate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnauthorizedAttemptEvent {
    pub caller: Address,
    pub patient: Address,
    pub record_id: Option<u64>,
    pub timestamp: u64,
}

/// Event published when the admin changes the read cooldown interval.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CooldownChangedEvent {
    pub interval_secs: u64,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, read_cooldown_secs: u64) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        read_cooldown_secs,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_registered(env: &Env, patient: Address, name: String) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        patient,
        name,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a record is appended to the ledger.
/// Topics carry the owning patient and the authoring provider so indexers
/// can follow either party.
pub fn publish_record_added(env: &Env, record_id: u64, patient: Address, author: Address) {
    let topics = (symbol_short!("REC_ADD"), patient.clone(), author.clone());
    let data = RecordAddedEvent {
        record_id,
        patient,
        author,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_granted(env: &Env, owner: Address, grantee: Address) {
    let topics = (symbol_short!("ACC_GRT"), owner.clone(), grantee.clone());
    let data = AccessGrantedEvent {
        owner,
        grantee,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_revoked(env: &Env, owner: Address, grantee: Address) {
    let topics = (symbol_short!("ACC_REV"), owner.clone(), grantee.clone());
    let data = AccessRevokedEvent {
        owner,
        grantee,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_provider_authorized(env: &Env, provider: Address) {
    let topics = (symbol_short!("PRV_AUTH"), provider.clone());
    let data = ProviderAuthorizedEvent {
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_provider_revoked(env: &Env, provider: Address) {
    let topics = (symbol_short!("PRV_REV"), provider.clone());
    let data = ProviderRevokedEvent {
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_emergency_accessed(env: &Env, record_id: u64, patient: Address, admin: Address) {
    let topics = (symbol_short!("EMRG_ACC"), admin.clone());
    let data = EmergencyAccessedEvent {
        record_id,
        patient,
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_unauthorized_attempt(
    env: &Env,
    caller: Address,
    patient: Address,
    record_id: Option<u64>,
) {
    let topics = (symbol_short!("UNAUTH"), caller.clone());
    let data = UnauthorizedAttemptEvent {
        caller,
        patient,
        record_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_cooldown_changed(env: &Env, interval_secs: u64) {
    let topics = (symbol_short!("CD_SET"),);
    let data = CooldownChangedEvent {
        interval_secs,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
