pub mod hasher;

pub use hasher::{hash_secret, verify_secret, CredentialDigest, DIGEST_HEX_LENGTH};
