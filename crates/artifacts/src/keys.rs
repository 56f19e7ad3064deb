//! Persistence for Groth16 proving and verifying keys
//!
//! Setup is the expensive step of the workflow, so keys are written once
//! into a directory and reloaded on later runs.

use std::path::{Path, PathBuf};

use ark_groth16::Groth16;
use ark_relations::r1cs::ConstraintSynthesizer;
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use tracing::info;
use zkverifier_types::{Bn254, Fr, ProvingKey, VerifyingKey};

use crate::binary::{read_artifact, write_artifact};
use crate::error::{ArtifactError, Result};
use crate::fs::file_exists;

/// Default directory for storing Groth16 keys
pub const DEFAULT_KEYS_DIR: &str = "./keys";

pub const PROVING_KEY_FILE: &str = "groth16_proving_key.bin";
pub const VERIFYING_KEY_FILE: &str = "groth16_verifying_key.bin";

/// Directory-backed Groth16 key pair
pub struct KeyStore {
    keys_dir: PathBuf,
    proving_key: Option<ProvingKey>,
    verifying_key: Option<VerifyingKey>,
}

impl KeyStore {
    pub fn new(keys_dir: Option<PathBuf>) -> Self {
        let keys_dir = keys_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_KEYS_DIR));
        Self {
            keys_dir,
            proving_key: None,
            verifying_key: None,
        }
    }

    pub fn proving_key_path(&self) -> PathBuf {
        self.keys_dir.join(PROVING_KEY_FILE)
    }

    pub fn verifying_key_path(&self) -> PathBuf {
        self.keys_dir.join(VERIFYING_KEY_FILE)
    }

    /// Load keys from disk, or run setup for `circuit` and persist the result.
    ///
    /// Returns `true` when a fresh setup was performed.
    pub fn load_or_setup<C, R>(
        &mut self,
        circuit: C,
        force_regenerate: bool,
        rng: &mut R,
    ) -> Result<bool>
    where
        C: ConstraintSynthesizer<Fr>,
        R: RngCore + CryptoRng,
    {
        let keys_exist =
            file_exists(self.proving_key_path())? && file_exists(self.verifying_key_path())?;

        if keys_exist && !force_regenerate {
            self.load()?;
            return Ok(false);
        }

        self.setup(circuit, rng)?;
        self.save()?;
        Ok(true)
    }

    fn setup<C, R>(&mut self, circuit: C, rng: &mut R) -> Result<()>
    where
        C: ConstraintSynthesizer<Fr>,
        R: RngCore + CryptoRng,
    {
        let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(circuit, rng)
            .map_err(|e| ArtifactError::Setup(e.to_string()))?;

        info!(
            public_inputs = vk.gamma_abc_g1.len().saturating_sub(1),
            "generated Groth16 keys"
        );
        self.proving_key = Some(pk);
        self.verifying_key = Some(vk);
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(ref pk) = self.proving_key {
            write_artifact(pk, &self.proving_key_path(), "proving key")?;
        }
        if let Some(ref vk) = self.verifying_key {
            write_artifact(vk, &self.verifying_key_path(), "verifying key")?;
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let pk: ProvingKey = read_artifact(&self.proving_key_path(), "proving key")?;
        let vk: VerifyingKey = read_artifact(&self.verifying_key_path(), "verifying key")?;

        info!(dir = %self.keys_dir.display(), "loaded Groth16 keys");
        self.proving_key = Some(pk);
        self.verifying_key = Some(vk);
        Ok(())
    }

    pub fn proving_key(&self) -> Result<&ProvingKey> {
        self.proving_key
            .as_ref()
            .ok_or(ArtifactError::KeysNotLoaded("proving key"))
    }

    pub fn verifying_key(&self) -> Result<&VerifyingKey> {
        self.verifying_key
            .as_ref()
            .ok_or(ArtifactError::KeysNotLoaded("verifying key"))
    }

    pub fn keys_dir(&self) -> &Path {
        &self.keys_dir
    }
}
