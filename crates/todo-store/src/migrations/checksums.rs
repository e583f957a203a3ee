//! Migration fingerprints
//!
//! Line endings are normalised first, so the same migration checked out
//! with CRLF endings still matches the recorded checksum.

use sha2::{Digest, Sha256};

/// Hex SHA-256 of the migration SQL with `\r\n` folded to `\n`
pub fn migration_checksum(sql: &str) -> String {
    let normalised = sql.replace("\r\n", "\n");
    hex::encode(Sha256::digest(normalised.as_bytes()))
}
