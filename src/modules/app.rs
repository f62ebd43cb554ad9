use log::info;
use std::path::Path;

use super::config::AppConfig;
use super::error::{Result, StorageError};
use super::storage::Database;
use super::voters::{self, LoginForm, RegistrationForm, Voter, VoterId};
use super::voting::{self, VoteRecord};

/// Application state: owns the single storage handle for the lifetime of the process
pub struct VotingSystem {
    db: Database,
}

impl VotingSystem {
    /// Open the database named in `config`, creating the schema if needed
    pub fn open(config: &AppConfig) -> Result<Self, StorageError> {
        Self::open_path(&config.database_path)
    }

    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        Ok(Self::with_database(Database::open(path)?))
    }

    pub fn with_database(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn register(&self, form: &RegistrationForm) -> Result<VoterId> {
        voters::register_voter(&self.db, form)
    }

    pub fn authenticate(&self, form: &LoginForm) -> Result<VoterId> {
        voters::authenticate_voter(&self.db, form)
    }

    pub fn cast_vote(&self, voter: VoterId, election_name: &str, candidate: &str) -> Result<()> {
        voting::cast_vote(&self.db, voter, election_name, candidate)
    }

    pub fn voter(&self, voter: VoterId) -> Result<Option<Voter>> {
        Ok(self.db.voter_by_id(voter)?)
    }

    pub fn recorded_vote(&self, voter: VoterId, election_name: &str) -> Result<Option<VoteRecord>> {
        Ok(self.db.vote_for(voter, election_name)?)
    }

    /// Release the storage handle
    pub fn close(self) -> Result<(), StorageError> {
        info!("Shutting down voting system");
        self.db.close()
    }
}
