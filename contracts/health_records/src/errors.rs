use soroban_sdk::contracterror;

/// Error codes for the health-record ledger.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authentication & authorisation |
/// | 20 – 29 | Missing-prerequisite state     |
/// | 30 – 39 | Validation / input             |
/// | 40 – 49 | Duplicate state transitions    |
/// | 50 – 59 | Throttling                     |
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The contract has not been initialised yet.
    NotInitialized = 1,
    /// `initialize` was called more than once.
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller is not the admin.
    Unauthorized = 10,
    /// The caller fails the shared access predicate for the target
    /// patient's data.
    AccessDenied = 11,
    /// The caller (or target of a provider revocation) is not in the
    /// provider set.
    NotAuthorizedProvider = 12,
    /// The admin's provider membership can never be revoked.
    CannotRevokeAdmin = 13,

    // ── Missing state (20–29) ────────────────────────────────
    /// The identity has no patient registration.
    NotRegistered = 20,
    /// No active permission edge exists for the owner/grantee pair.
    NoSuchGrant = 21,
    /// The record id is outside the allocated range.
    InvalidRecordId = 22,

    // ── Validation (30–39) ───────────────────────────────────
    /// Empty or out-of-range argument.
    InvalidInput = 30,
    /// Structurally invalid target identity (e.g. granting access to
    /// oneself).
    InvalidTarget = 31,

    // ── Duplicate transitions (40–49) ────────────────────────
    /// The identity already has a patient registration.
    AlreadyRegistered = 40,
    /// The permission edge is already active.
    AlreadyGranted = 41,
    /// The identity is already in the provider set.
    AlreadyAuthorized = 42,

    // ── Throttling (50–59) ───────────────────────────────────
    /// The caller's minimum read interval has not elapsed.
    RateLimited = 50,
}

/// Coarse classification used when reasoning about failures off-chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Lifecycle,
    Authorization,
    MissingState,
    Validation,
    StateConflict,
    Throttle,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            ContractError::Unauthorized
            | ContractError::AccessDenied
            | ContractError::NotAuthorizedProvider
            | ContractError::CannotRevokeAdmin => ErrorCategory::Authorization,
            ContractError::NotRegistered
            | ContractError::NoSuchGrant
            | ContractError::InvalidRecordId => ErrorCategory::MissingState,
            ContractError::InvalidInput | ContractError::InvalidTarget => {
                ErrorCategory::Validation
            }
            ContractError::AlreadyRegistered
            | ContractError::AlreadyGranted
            | ContractError::AlreadyAuthorized => ErrorCategory::StateConflict,
            ContractError::RateLimited => ErrorCategory::Throttle,
        }
    }

    /// Whether the caller may succeed by simply retrying later.
    /// Only throttle refusals qualify; every other failure needs a
    /// corrected input or a prior state transition.
    pub fn retryable(&self) -> bool {
        matches!(self, ContractError::RateLimited)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not the admin",
            ContractError::AccessDenied => "Access denied to the requested patient data",
            ContractError::NotAuthorizedProvider => "Identity is not an authorized provider",
            ContractError::CannotRevokeAdmin => "Admin provider status cannot be revoked",
            ContractError::NotRegistered => "Identity has no patient registration",
            ContractError::NoSuchGrant => "No active access grant for this pair",
            ContractError::InvalidRecordId => "Record id is out of range",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::InvalidTarget => "Target identity is not valid for this operation",
            ContractError::AlreadyRegistered => "Identity is already registered as a patient",
            ContractError::AlreadyGranted => "Access grant is already active",
            ContractError::AlreadyAuthorized => "Identity is already an authorized provider",
            ContractError::RateLimited => "Read interval not elapsed, retry later",
        }
    }
}
