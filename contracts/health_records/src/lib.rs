#![no_std]

//! Permissioned health-record ledger.
//!
//! Patients register once and own an append-only list of immutable records.
//! Providers author records; patients grant and revoke per-grantee read
//! access; the admin manages the provider set and holds a break-glass read
//! path. Every read of patient-owned data goes through the single predicate
//! in [`access::can_view`] and through the per-caller read throttle.

pub mod access;
pub mod errors;
pub mod events;
pub mod patients;
pub mod providers;
pub mod records;
pub mod throttle;
pub mod validation;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

pub use errors::ContractError;
pub use patients::Patient;
pub use records::HealthRecord;

// ── Storage keys ──────────────────────────────────────────────
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// View of a patient returned by `get_patient_info`.
///
/// Blood group and age are deliberately absent: they are sensitive and only
/// surface inside individual records, which sit behind the same predicate
/// plus a valid record id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientInfo {
    pub name: String,
    pub registered: bool,
    pub record_count: u32,
}

#[contract]
pub struct HealthRecordsContract;

#[contractimpl]
impl HealthRecordsContract {
    /// Initialize the ledger with its admin.
    ///
    /// The admin joins the provider set immediately and can never leave it.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        providers::add_provider(&env, &admin);
        throttle::set_read_cooldown(&env, throttle::DEFAULT_READ_COOLDOWN_SECS);

        events::publish_initialized(&env, admin, throttle::DEFAULT_READ_COOLDOWN_SECS);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Set the minimum interval between gated reads. Admin only; zero
    /// disables the throttle.
    pub fn set_read_cooldown(
        env: Env,
        caller: Address,
        interval_secs: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        throttle::set_read_cooldown(&env, interval_secs);
        events::publish_cooldown_changed(&env, interval_secs);

        Ok(())
    }

    pub fn get_read_cooldown(env: Env) -> u64 {
        throttle::read_cooldown(&env)
    }

    // ── Identity & role registry ─────────────────────────────

    /// Add an identity to the provider set. Admin only.
    pub fn authorize_provider(
        env: Env,
        caller: Address,
        target: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if providers::is_provider(&env, &target) {
            return Err(ContractError::AlreadyAuthorized);
        }

        providers::add_provider(&env, &target);
        events::publish_provider_authorized(&env, target);

        Ok(())
    }

    /// Remove an identity from the provider set. Admin only; the admin's
    /// own membership is permanent.
    pub fn revoke_provider(
        env: Env,
        caller: Address,
        target: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let admin = Self::require_admin(&env, &caller)?;

        if target == admin {
            return Err(ContractError::CannotRevokeAdmin);
        }
        if !providers::is_provider(&env, &target) {
            return Err(ContractError::NotAuthorizedProvider);
        }

        providers::remove_provider(&env, &target);
        events::publish_provider_revoked(&env, target);

        Ok(())
    }

    /// Open lookup; provider status is not sensitive.
    pub fn is_provider(env: Env, identity: Address) -> bool {
        providers::is_provider(&env, &identity)
    }

    // ── Patient registry ─────────────────────────────────────

    /// Register the caller as a patient. Exactly once per identity,
    /// permanent, demographics immutable afterwards.
    pub fn register_patient(
        env: Env,
        caller: Address,
        name: String,
        blood_group: String,
        age: u32,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if patients::has_patient(&env, &caller) {
            return Err(ContractError::AlreadyRegistered);
        }

        validation::validate_name(&name)?;
        validation::validate_blood_group(&blood_group)?;
        validation::validate_age(age)?;

        let patient = Patient {
            address: caller.clone(),
            name: name.clone(),
            blood_group,
            age,
            registered: true,
            registered_at: env.ledger().timestamp(),
        };
        patients::set_patient(&env, &patient);

        events::publish_patient_registered(&env, caller, name);

        Ok(())
    }

    /// Open lookup; the registration flag is treated as non-sensitive
    /// metadata.
    pub fn is_registered(env: Env, identity: Address) -> bool {
        patients::has_patient(&env, &identity)
    }

    /// Name, registration flag and record count for a patient. Gated by the
    /// shared predicate and the read throttle; never exposes blood group or
    /// age.
    pub fn get_patient_info(
        env: Env,
        caller: Address,
        target: Address,
    ) -> Result<PatientInfo, ContractError> {
        caller.require_auth();
        throttle::enforce(&env, &caller)?;
        Self::guard_view(&env, &caller, &target, None)?;

        let patient = patients::require_patient(&env, &target)?;

        Ok(PatientInfo {
            name: patient.name,
            registered: patient.registered,
            record_count: records::patient_record_ids(&env, &target).len(),
        })
    }

    // ── Permission matrix ────────────────────────────────────

    /// Activate the edge (caller → grantee). Only registered patients hold
    /// grantable data; self-grants are structurally invalid.
    pub fn grant_access(env: Env, caller: Address, grantee: Address) -> Result<(), ContractError> {
        caller.require_auth();

        patients::require_patient(&env, &caller)?;

        if grantee == caller {
            return Err(ContractError::InvalidTarget);
        }
        if access::has_grant(&env, &caller, &grantee) {
            return Err(ContractError::AlreadyGranted);
        }

        access::set_grant(&env, &caller, &grantee);
        events::publish_access_granted(&env, caller, grantee);

        Ok(())
    }

    /// Deactivate the edge (caller → grantee). Immediate for all subsequent
    /// reads; already-returned data is not recalled.
    pub fn revoke_access(env: Env, caller: Address, grantee: Address) -> Result<(), ContractError> {
        caller.require_auth();

        if !access::has_grant(&env, &caller, &grantee) {
            return Err(ContractError::NoSuchGrant);
        }

        access::clear_grant(&env, &caller, &grantee);
        events::publish_access_revoked(&env, caller, grantee);

        Ok(())
    }

    /// The shared access predicate, exposed as an open lookup.
    pub fn check_access(env: Env, patient: Address, person: Address) -> bool {
        access::can_view(&env, &patient, &person)
    }

    // ── Record store ─────────────────────────────────────────

    /// Append an immutable record for `patient`. Providers only. Snapshots
    /// the patient's demographics at creation time and stamps the caller as
    /// author.
    pub fn add_health_record(
        env: Env,
        caller: Address,
        patient: Address,
        diagnosis: String,
        treatment: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        if !providers::is_provider(&env, &caller) {
            return Err(ContractError::NotAuthorizedProvider);
        }

        let patient_data = patients::require_patient(&env, &patient)?;

        validation::validate_clinical_text(&diagnosis)?;
        validation::validate_clinical_text(&treatment)?;

        let record_id = records::next_record_id(&env);
        let record = HealthRecord {
            id: record_id,
            patient: patient.clone(),
            name: patient_data.name,
            age: patient_data.age,
            blood_group: patient_data.blood_group,
            diagnosis,
            treatment,
            created_at: env.ledger().timestamp(),
            author: caller.clone(),
        };

        records::set_record(&env, &record);
        records::append_patient_record(&env, &patient, record_id);

        events::publish_record_added(&env, record_id, patient, caller);

        Ok(record_id)
    }

    /// Fetch a single record. Throttled, then authorized against the
    /// record's owner via the shared predicate.
    pub fn get_health_record(
        env: Env,
        caller: Address,
        record_id: u64,
    ) -> Result<HealthRecord, ContractError> {
        caller.require_auth();
        throttle::enforce(&env, &caller)?;

        let record = records::require_record(&env, record_id)?;
        Self::guard_view(&env, &caller, &record.patient, Some(record_id))?;

        Ok(record)
    }

    /// Record ids owned by `patient`, in creation order. Same gating as
    /// single-record fetch.
    pub fn get_patient_record_ids(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<u64>, ContractError> {
        caller.require_auth();
        throttle::enforce(&env, &caller)?;
        Self::guard_view(&env, &caller, &patient, None)?;

        patients::require_patient(&env, &patient)?;

        Ok(records::patient_record_ids(&env, &patient))
    }

    /// Number of records owned by `patient`. Same gating as the id list.
    pub fn get_record_count(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<u32, ContractError> {
        caller.require_auth();
        throttle::enforce(&env, &caller)?;
        Self::guard_view(&env, &caller, &patient, None)?;

        patients::require_patient(&env, &patient)?;

        Ok(records::patient_record_ids(&env, &patient).len())
    }

    /// Total number of records ever added. Open lookup; the counter value
    /// reveals no record contents.
    pub fn get_total_records(env: Env) -> u64 {
        records::record_count(&env)
    }

    /// Break-glass read. Admin only, bypasses the predicate and the
    /// throttle, and always leaves an `EmergencyAccessed` trace.
    pub fn emergency_access(
        env: Env,
        caller: Address,
        record_id: u64,
    ) -> Result<HealthRecord, ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let record = records::require_record(&env, record_id)?;

        events::publish_emergency_accessed(&env, record_id, record.patient.clone(), caller);

        Ok(record)
    }

    // ── Internal helpers ─────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<Address, ContractError> {
        let admin = Self::get_admin(env.clone())?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(admin)
    }

    /// Applies the shared predicate and records refused attempts for
    /// auditors before failing with `AccessDenied`.
    fn guard_view(
        env: &Env,
        caller: &Address,
        patient: &Address,
        record_id: Option<u64>,
    ) -> Result<(), ContractError> {
        if !access::can_view(env, patient, caller) {
            events::publish_unauthorized_attempt(
                env,
                caller.clone(),
                patient.clone(),
                record_id,
            );
            return Err(ContractError::AccessDenied);
        }
        Ok(())
    }
}



#[cfg(test)]
mod test_throttle;
