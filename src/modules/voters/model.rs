use chrono::{DateTime, Utc};
use std::fmt;

/// Opaque reference to a stored voter, handed out by a successful login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoterId(i64);

impl VoterId {
    pub(crate) fn from_row(id: i64) -> Self {
        VoterId(id)
    }

    pub(crate) fn as_row(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "voter#{}", self.0)
    }
}

/// A registered voter as stored in the `voters` table
#[derive(Debug, Clone, PartialEq)]
pub struct Voter {
    pub id: VoterId,
    pub identity_number: String, // 12 digits, unique
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub address: String,
    pub credential_hash: String,
    pub is_registered: bool,
    pub registration_date: DateTime<Utc>,
}

/// Validated voter data ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewVoter {
    pub identity_number: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub address: String,
    pub credential_hash: String,
    pub registration_date: DateTime<Utc>,
}

/// Raw registration form input, exactly as typed by the user
#[derive(Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub identity_number: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub address: String,
    pub secret: String,
}

/// Raw login form input
#[derive(Clone, Default, PartialEq)]
pub struct LoginForm {
    pub identity_number: String,
    pub secret: String,
}

// Secrets never show up in debug output
impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("identity_number", &self.identity_number)
            .field("name", &self.name)
            .field("age", &self.age)
            .field("gender", &self.gender)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("identity_number", &self.identity_number)
            .finish_non_exhaustive()
    }
}
