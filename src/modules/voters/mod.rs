pub mod authentication;
pub mod model;
pub mod registration;

// Re-export the main types and functions
pub use authentication::authenticate_voter;
pub use model::{LoginForm, NewVoter, RegistrationForm, Voter, VoterId};
pub use registration::{register_voter, validate_identity_number, validate_registration};
