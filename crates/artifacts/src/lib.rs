pub mod binary;
pub mod config;
pub mod error;
pub mod fs;
pub mod keys;
pub mod solidity;
pub mod verifier;
pub mod witness;

#[cfg(test)]
mod tests;

pub use binary::{
    read_constraint_system, read_proof, read_verifying_key, write_constraint_system, write_proof,
    write_verifying_key,
};
pub use config::{ArtifactKind, ExportConfig};
pub use error::{ArtifactError, Result};
pub use fs::{ensure_parent_dir, file_exists, open_for_create_or_overwrite};
pub use keys::KeyStore;
pub use solidity::{export_proof_solidity, write_proof_as_solidity};
pub use verifier::{
    write_verifying_key_as_solidity, write_verifying_key_as_solidity_with, ExportSolidity,
    SolidityVerifierOptions,
};
pub use witness::write_public_witness_as_json;
