//! Binary export and import of proofs, keys and constraint systems.
//!
//! Everything goes through arkworks canonical serialization in compressed
//! form. Decoding validates that points are on the curve and in the right
//! subgroup, so a corrupt or foreign file is rejected rather than
//! half-loaded.

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use tracing::{debug, info};
use zkverifier_types::{Proof, R1csArtifact, VerifyingKey};

use crate::error::{ArtifactError, Result};
use crate::fs::{open_for_create_or_overwrite, open_for_read};

pub(crate) fn write_artifact<T: CanonicalSerialize>(
    value: &T,
    path: &Path,
    artifact: &'static str,
) -> Result<()> {
    let file = open_for_create_or_overwrite(path)?;
    let mut writer = BufWriter::new(file);

    value
        .serialize_compressed(&mut writer)
        .map_err(|e| ArtifactError::serialization(artifact, e))?;
    writer
        .flush()
        .map_err(|e| ArtifactError::io("write", path, e))?;

    info!(path = %path.display(), bytes = value.compressed_size(), "wrote {}", artifact);
    Ok(())
}

pub(crate) fn read_artifact<T: CanonicalDeserialize>(
    path: &Path,
    artifact: &'static str,
) -> Result<T> {
    let file = open_for_read(path)?;
    debug!(path = %path.display(), "reading {}", artifact);

    T::deserialize_compressed(BufReader::new(file))
        .map_err(|e| ArtifactError::serialization(artifact, e))
}

pub fn write_constraint_system(r1cs: &R1csArtifact, path: impl AsRef<Path>) -> Result<()> {
    write_artifact(r1cs, path.as_ref(), "constraint system")
}

pub fn read_constraint_system(path: impl AsRef<Path>) -> Result<R1csArtifact> {
    read_artifact(path.as_ref(), "constraint system")
}

pub fn write_proof(proof: &Proof, path: impl AsRef<Path>) -> Result<()> {
    write_artifact(proof, path.as_ref(), "proof")
}

/// Decode a BN254 proof written by [`write_proof`].
pub fn read_proof(path: impl AsRef<Path>) -> Result<Proof> {
    read_artifact(path.as_ref(), "proof")
}

pub fn write_verifying_key(vk: &VerifyingKey, path: impl AsRef<Path>) -> Result<()> {
    write_artifact(vk, path.as_ref(), "verifying key")
}

pub fn read_verifying_key(path: impl AsRef<Path>) -> Result<VerifyingKey> {
    read_artifact(path.as_ref(), "verifying key")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_std::UniformRand;
    use std::fs;
    use zkverifier_types::{G1Affine, G2Affine};

    fn sample_proof(commitments: usize) -> Proof {
        let mut rng = ark_std::test_rng();
        let g = G1Affine::generator();
        let commitments = (1..=commitments as u64)
            .map(|k| (g * zkverifier_types::Fr::from(k)).into_affine())
            .collect();
        Proof::new(
            G1Affine::rand(&mut rng),
            G2Affine::rand(&mut rng),
            G1Affine::rand(&mut rng),
        )
        .with_commitments(commitments, G1Affine::rand(&mut rng))
    }

    #[test]
    fn test_proof_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("proofs").join("proof");

        for n in [0, 1, 3] {
            let proof = sample_proof(n);
            write_proof(&proof, &path).unwrap();
            let decoded = read_proof(&path).unwrap();
            assert_eq!(decoded, proof);
            assert_eq!(decoded.commitments.len(), n);
        }
    }

    #[test]
    fn test_read_proof_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_proof(tmp.path().join("proof")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }

    #[test]
    fn test_read_proof_garbage() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("proof");
        fs::write(&path, [0xffu8; 40]).unwrap();

        let err = read_proof(&path).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Serialization { artifact: "proof", .. }
        ));
    }

    #[test]
    fn test_read_proof_truncated() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("proof");
        write_proof(&sample_proof(2), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() - 8]).unwrap();

        assert!(read_proof(&path).is_err());
    }
}
