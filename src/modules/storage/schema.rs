/// Voter registrations. `aadhaar_number` holds the 12-digit identity number and
/// `fingerprint_hash` the credential digest; the column names match databases
/// written by earlier releases of the application.
pub const CREATE_VOTERS: &str = "
CREATE TABLE IF NOT EXISTS voters (
    voter_id INTEGER PRIMARY KEY AUTOINCREMENT,
    aadhaar_number TEXT UNIQUE NOT NULL,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT,
    address TEXT,
    fingerprint_hash TEXT NOT NULL,
    is_registered BOOLEAN DEFAULT 0,
    registration_date DATETIME
)";

/// One row per cast vote; a voter votes at most once per election
pub const CREATE_VOTING_RECORDS: &str = "
CREATE TABLE IF NOT EXISTS voting_records (
    record_id INTEGER PRIMARY KEY AUTOINCREMENT,
    voter_id INTEGER NOT NULL,
    election_name TEXT NOT NULL,
    voted_candidate TEXT NOT NULL,
    voting_timestamp DATETIME,
    FOREIGN KEY(voter_id) REFERENCES voters(voter_id),
    UNIQUE(voter_id, election_name)
)";

pub const VOTER_COLUMNS: &str = "voter_id, aadhaar_number, name, age, gender, address, \
     fingerprint_hash, is_registered, registration_date";
