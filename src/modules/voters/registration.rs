use chrono::Utc;

use super::model::{NewVoter, RegistrationForm, VoterId};
use crate::modules::error::{Result, StorageError, ValidationError, VotingError};
use crate::modules::security::hash_secret;
use crate::modules::storage::Database;
use crate::modules::utils::logging::log_auth_event;
use crate::{IDENTITY_NUMBER_LENGTH, MIN_VOTING_AGE};

/// Function to validate the identity number format: exactly 12 ASCII digits
pub fn validate_identity_number(identity_number: &str) -> bool {
    identity_number.len() == IDENTITY_NUMBER_LENGTH
        && identity_number.chars().all(|c| c.is_ascii_digit())
}

/// Validate a registration form and turn it into an insertable voter.
///
/// Checks run in a fixed order and the first failure wins: identity number,
/// then age, then the remaining required fields.
pub fn validate_registration(form: &RegistrationForm) -> Result<NewVoter, ValidationError> {
    if !validate_identity_number(&form.identity_number) {
        return Err(ValidationError::InvalidIdentityNumber);
    }

    let age_text = form.age.trim();
    if age_text.is_empty() || !age_text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidAge);
    }
    let age: u32 = age_text.parse().map_err(|_| ValidationError::InvalidAge)?;
    if age < MIN_VOTING_AGE {
        return Err(ValidationError::Underage);
    }

    // Stored as typed; only a truly empty field is missing
    if form.name.is_empty()
        || form.gender.is_empty()
        || form.address.is_empty()
        || form.secret.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    Ok(NewVoter {
        identity_number: form.identity_number.clone(),
        name: form.name.clone(),
        age,
        gender: form.gender.clone(),
        address: form.address.clone(),
        credential_hash: hash_secret(&form.secret),
        registration_date: Utc::now(),
    })
}

/// Register a new voter. Nothing is written unless every check passes.
pub fn register_voter(db: &Database, form: &RegistrationForm) -> Result<VoterId> {
    let voter = match validate_registration(form) {
        Ok(voter) => voter,
        Err(e) => {
            log_auth_event("register", &form.identity_number, false, Some(&e.to_string()));
            return Err(e.into());
        }
    };

    match db.insert_voter(&voter) {
        Ok(id) => {
            log_auth_event("register", &voter.identity_number, true, None);
            Ok(id)
        }
        Err(StorageError::UniqueViolation) => {
            log_auth_event("register", &voter.identity_number, false, Some("already registered"));
            Err(VotingError::AlreadyRegistered)
        }
        Err(e) => {
            log_auth_event("register", &voter.identity_number, false, Some(&e.to_string()));
            Err(e.into())
        }
    }
}
