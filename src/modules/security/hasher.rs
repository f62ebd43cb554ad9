use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest
pub const DIGEST_HEX_LENGTH: usize = 64;

/// Hex-encoded one-way digest of a voter's shared secret
pub type CredentialDigest = String;

/// Function to hash a shared secret for storage and comparison.
///
/// The digest is unsalted: the same secret always yields the same digest,
/// so two voters with the same secret share a stored digest.
pub fn hash_secret(secret: &str) -> CredentialDigest {
    hex::encode(Sha256::digest(secret.as_bytes()))
}

/// Recompute the digest of `secret` and compare it with a stored one
pub fn verify_secret(secret: &str, stored_digest: &str) -> bool {
    hash_secret(secret).as_bytes() == stored_digest.as_bytes()
}
