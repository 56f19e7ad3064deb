use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::keys::DEFAULT_KEYS_DIR;
use crate::verifier::{SolidityVerifierOptions, DEFAULT_CONTRACT_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    ConstraintSystem,
    Proof,
    ProofSolidity,
    VerifyingKey,
    VerifyingKeySolidity,
    PublicWitness,
}

/// Where the export workflow puts its files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub keys_dir: PathBuf,
    pub contract_name: String,
    pub constraint_system_file: String,
    pub proof_file: String,
    pub proof_solidity_file: String,
    pub verifying_key_file: String,
    pub verifier_contract_file: String,
    pub public_witness_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: std::env::var("ARTIFACTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./build")),
            keys_dir: std::env::var("GROTH16_KEYS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_KEYS_DIR)),
            contract_name: std::env::var("VERIFIER_CONTRACT_NAME")
                .unwrap_or_else(|_| DEFAULT_CONTRACT_NAME.to_string()),
            constraint_system_file: "circuit.r1cs".to_string(),
            proof_file: "proof".to_string(),
            proof_solidity_file: "proof_solidity".to_string(),
            verifying_key_file: "verifying_key.bin".to_string(),
            verifier_contract_file: "Verifier.sol".to_string(),
            public_witness_file: "public_witness.json".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_keys_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.keys_dir = dir.into();
        self
    }

    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        let name = match kind {
            ArtifactKind::ConstraintSystem => &self.constraint_system_file,
            ArtifactKind::Proof => &self.proof_file,
            ArtifactKind::ProofSolidity => &self.proof_solidity_file,
            ArtifactKind::VerifyingKey => &self.verifying_key_file,
            ArtifactKind::VerifyingKeySolidity => &self.verifier_contract_file,
            ArtifactKind::PublicWitness => &self.public_witness_file,
        };
        self.output_dir.join(name)
    }

    pub fn solidity_options(&self) -> SolidityVerifierOptions {
        SolidityVerifierOptions {
            contract_name: self.contract_name.clone(),
        }
    }
}
