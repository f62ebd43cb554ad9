use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};

use super::schema::{CREATE_VOTERS, CREATE_VOTING_RECORDS, VOTER_COLUMNS};
use crate::modules::error::StorageError;
use crate::modules::voters::{NewVoter, Voter, VoterId};
use crate::modules::voting::{NewVote, VoteRecord};

/// Owned handle to the voting database. The connection is released on `close` or drop.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)?;
        let db = Self::initialize(conn, Some(path))?;
        info!("Opened voting database at {}", db.location());
        Ok(db)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn, None)
    }

    fn initialize(conn: Connection, path: Option<PathBuf>) -> Result<Self, StorageError> {
        conn.pragma_update(None, "foreign_keys", true)?;
        let db = Self { conn, path };
        db.create_tables()?;
        Ok(db)
    }

    /// Create both tables if they are missing. Safe to call repeatedly.
    pub fn create_tables(&self) -> Result<(), StorageError> {
        self.conn.execute(CREATE_VOTERS, [])?;
        self.conn.execute(CREATE_VOTING_RECORDS, [])?;
        debug!("Schema ready");
        Ok(())
    }

    /// Where the data lives, for log messages
    pub fn location(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => ":memory:".to_string(),
        }
    }

    /// Insert a voter. A duplicate identity number fails with `UniqueViolation`.
    pub fn insert_voter(&self, voter: &NewVoter) -> Result<VoterId, StorageError> {
        self.conn.execute(
            "INSERT INTO voters
             (aadhaar_number, name, age, gender, address, fingerprint_hash, is_registered, registration_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                voter.identity_number,
                voter.name,
                voter.age,
                voter.gender,
                voter.address,
                voter.credential_hash,
                true,
                voter.registration_date,
            ],
        )?;
        Ok(VoterId::from_row(self.conn.last_insert_rowid()))
    }

    /// Id and stored digest of a registered voter, if any
    pub fn find_registered_credential(
        &self,
        identity_number: &str,
    ) -> Result<Option<(VoterId, String)>, StorageError> {
        let found = self
            .conn
            .query_row(
                "SELECT voter_id, fingerprint_hash FROM voters
                 WHERE aadhaar_number = ?1 AND is_registered = 1",
                params![identity_number],
                |row| Ok((VoterId::from_row(row.get(0)?), row.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(found)
    }

    /// Full voter record by identity number
    pub fn find_voter(&self, identity_number: &str) -> Result<Option<Voter>, StorageError> {
        let sql = format!("SELECT {} FROM voters WHERE aadhaar_number = ?1", VOTER_COLUMNS);
        let voter = self
            .conn
            .query_row(&sql, params![identity_number], voter_from_row)
            .optional()?;
        Ok(voter)
    }

    /// Full voter record by internal reference
    pub fn voter_by_id(&self, id: VoterId) -> Result<Option<Voter>, StorageError> {
        let sql = format!("SELECT {} FROM voters WHERE voter_id = ?1", VOTER_COLUMNS);
        let voter = self
            .conn
            .query_row(&sql, params![id.as_row()], voter_from_row)
            .optional()?;
        Ok(voter)
    }

    /// Whether a vote already exists for (voter, election)
    pub fn has_voted(&self, voter: VoterId, election_name: &str) -> Result<bool, StorageError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM voting_records WHERE voter_id = ?1 AND election_name = ?2",
            params![voter.as_row(), election_name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Insert a vote. A second vote for the same (voter, election) fails with `UniqueViolation`.
    pub fn insert_vote(&self, vote: &NewVote) -> Result<i64, StorageError> {
        self.conn.execute(
            "INSERT INTO voting_records
             (voter_id, election_name, voted_candidate, voting_timestamp)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                vote.voter.as_row(),
                vote.election_name,
                vote.candidate,
                vote.cast_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The recorded vote for (voter, election), if any
    pub fn vote_for(
        &self,
        voter: VoterId,
        election_name: &str,
    ) -> Result<Option<VoteRecord>, StorageError> {
        let record = self
            .conn
            .query_row(
                "SELECT record_id, voter_id, election_name, voted_candidate, voting_timestamp
                 FROM voting_records WHERE voter_id = ?1 AND election_name = ?2",
                params![voter.as_row(), election_name],
                |row| {
                    Ok(VoteRecord {
                        record_id: row.get(0)?,
                        voter: VoterId::from_row(row.get(1)?),
                        election_name: row.get(2)?,
                        candidate: row.get(3)?,
                        cast_at: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    pub fn close(self) -> Result<(), StorageError> {
        let location = self.location();
        self.conn.close().map_err(|(_, e)| StorageError::from(e))?;
        info!("Closed voting database at {}", location);
        Ok(())
    }
}

fn voter_from_row(row: &Row<'_>) -> rusqlite::Result<Voter> {
    Ok(Voter {
        id: VoterId::from_row(row.get(0)?),
        identity_number: row.get(1)?,
        name: row.get(2)?,
        age: row.get(3)?,
        gender: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        address: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        credential_hash: row.get(6)?,
        is_registered: row.get(7)?,
        registration_date: row.get(8)?,
    })
}
