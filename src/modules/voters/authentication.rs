use super::model::{LoginForm, VoterId};
use crate::modules::error::{AuthError, Result};
use crate::modules::security::verify_secret;
use crate::modules::storage::Database;
use crate::modules::utils::logging::log_auth_event;

/// Authenticate a voter by identity number and shared secret.
///
/// On success returns the voter's reference for the voting flow. There is no
/// lockout; callers may retry as often as they like.
pub fn authenticate_voter(db: &Database, form: &LoginForm) -> Result<VoterId> {
    let (voter_id, stored_digest) = match db.find_registered_credential(&form.identity_number)? {
        Some(found) => found,
        None => {
            log_auth_event("login", &form.identity_number, false, Some("not found"));
            return Err(AuthError::VoterNotFound.into());
        }
    };

    if !verify_secret(&form.secret, &stored_digest) {
        log_auth_event("login", &form.identity_number, false, Some("credential mismatch"));
        return Err(AuthError::CredentialMismatch.into());
    }

    log_auth_event("login", &form.identity_number, true, None);
    Ok(voter_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::error::VotingError;
    use crate::modules::voters::{register_voter, RegistrationForm};

    fn login(identity_number: &str, secret: &str) -> LoginForm {
        LoginForm {
            identity_number: identity_number.to_string(),
            secret: secret.to_string(),
        }
    }

    fn setup() -> (Database, VoterId) {
        let db = Database::open_in_memory().unwrap();
        let form = RegistrationForm {
            identity_number: "123456789012".to_string(),
            name: "Asha".to_string(),
            age: "30".to_string(),
            gender: "Female".to_string(),
            address: "Line1".to_string(),
            secret: "pw1".to_string(),
        };
        let id = register_voter(&db, &form).unwrap();
        (db, id)
    }

    #[test]
    fn test_correct_credentials() {
        let (db, id) = setup();
        assert_eq!(authenticate_voter(&db, &login("123456789012", "pw1")).unwrap(), id);
        // Unlimited retries: a failure does not block the next attempt
        assert!(authenticate_voter(&db, &login("123456789012", "bad")).is_err());
        assert_eq!(authenticate_voter(&db, &login("123456789012", "pw1")).unwrap(), id);
    }

    #[test]
    fn test_wrong_secret() {
        let (db, _) = setup();
        let err = authenticate_voter(&db, &login("123456789012", "wrong")).unwrap_err();
        assert!(matches!(
            err,
            VotingError::Authentication(AuthError::CredentialMismatch)
        ));
    }

    #[test]
    fn test_unknown_identity() {
        let (db, _) = setup();
        let err = authenticate_voter(&db, &login("999999999999", "pw1")).unwrap_err();
        assert!(matches!(err, VotingError::Authentication(AuthError::VoterNotFound)));
    }
}
