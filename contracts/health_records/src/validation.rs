//! Input validation for registration and record creation.
//!
//! All checks reject with [`ContractError::InvalidInput`]; nothing is
//! defaulted or coerced.

use soroban_sdk::String;

use crate::errors::ContractError;

/// Ages must fall in the open interval (0, 150).
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 149;

/// Upper bounds keep oversized payloads out of ledger storage.
pub const MAX_NAME_LENGTH: u32 = 100;
pub const MAX_BLOOD_GROUP_LENGTH: u32 = 10;
pub const MAX_CLINICAL_TEXT_LENGTH: u32 = 512;

fn validate_non_empty(value: &String, max_len: u32) -> Result<(), ContractError> {
    if value.is_empty() || value.len() > max_len {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_name(name: &String) -> Result<(), ContractError> {
    validate_non_empty(name, MAX_NAME_LENGTH)
}

pub fn validate_blood_group(blood_group: &String) -> Result<(), ContractError> {
    validate_non_empty(blood_group, MAX_BLOOD_GROUP_LENGTH)
}

pub fn validate_age(age: u32) -> Result<(), ContractError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Diagnosis and treatment text share the same bounds.
pub fn validate_clinical_text(text: &String) -> Result<(), ContractError> {
    validate_non_empty(text, MAX_CLINICAL_TEXT_LENGTH)
}
