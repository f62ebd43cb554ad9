// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{app, config, error, security, shell, storage, utils, voters, voting};

// Re-export commonly used types
pub use modules::app::VotingSystem;
pub use modules::config::AppConfig;
pub use modules::error::{ErrorKind, Result, VotingError};
pub use modules::storage::Database;
pub use modules::voters::{Voter, VoterId};

// Constants
pub const CONFIG_FILE: &str = "voting_config.json";
pub const DATABASE_FILE: &str = "voting_system.db";
pub const LOG_FILE: &str = "voting_system.log";
pub const IDENTITY_NUMBER_LENGTH: usize = 12;
pub const MIN_VOTING_AGE: u32 = 18;
pub const ELECTION_NAME: &str = "General Election 2024";
pub const CANDIDATES: [&str; 4] = ["Candidate A", "Candidate B", "Candidate C", "Candidate D"];
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
