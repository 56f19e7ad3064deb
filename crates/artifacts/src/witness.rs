//! Public witness export.
//!
//! Public inputs are written as a JSON array of decimal strings, the same
//! shape circom/snarkjs tooling uses for `public.json`. Strings rather than
//! numbers because field elements overflow every JSON number parser.

use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;
use zkverifier_types::{Fr, PublicWitness};

use crate::error::{ArtifactError, Result};
use crate::fs::{open_for_create_or_overwrite, open_for_read};
use crate::solidity::field_to_uint;

pub fn public_inputs_to_decimal(witness: &PublicWitness) -> Vec<String> {
    witness
        .vector()
        .iter()
        .map(|f| field_to_uint(f).to_string())
        .collect()
}

pub fn write_public_witness_as_json(witness: &PublicWitness, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = open_for_create_or_overwrite(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, &public_inputs_to_decimal(witness))?;
    writer
        .flush()
        .map_err(|e| ArtifactError::io("write", path, e))?;

    info!(path = %path.display(), inputs = witness.len(), "wrote public witness");
    Ok(())
}

/// Read back a file produced by [`write_public_witness_as_json`].
pub fn read_public_witness_json(path: impl AsRef<Path>) -> Result<PublicWitness> {
    let path = path.as_ref();
    let file = open_for_read(path)?;

    let values: Vec<String> = serde_json::from_reader(std::io::BufReader::new(file))?;

    let inputs = values
        .into_iter()
        .map(|value| {
            value
                .parse::<Fr>()
                .map_err(|_| ArtifactError::InvalidFieldElement {
                    path: path.to_path_buf(),
                    value,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PublicWitness::new(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::Field;

    #[test]
    fn test_json_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("public.json");

        let big = -Fr::ONE;
        let witness = PublicWitness::new(vec![Fr::from(35u64), Fr::from(0u64), big]);
        write_public_witness_as_json(&witness, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\"35\",\"0\",\""));

        let parsed: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(read_public_witness_json(&path).unwrap(), witness);
    }

    #[test]
    fn test_empty_witness() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("public.json");

        write_public_witness_as_json(&PublicWitness::default(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_rejects_non_field_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("public.json");
        std::fs::write(&path, r#"["12","abc"]"#).unwrap();

        let err = read_public_witness_json(&path).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::InvalidFieldElement { ref value, .. } if value == "abc"
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("public.json");
        std::fs::write(&path, "[\"12\",").unwrap();

        let err = read_public_witness_json(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Json(_)));
    }

    #[test]
    fn test_rejects_numbers_instead_of_strings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("public.json");
        std::fs::write(&path, "[35]").unwrap();

        assert!(matches!(
            read_public_witness_json(&path).unwrap_err(),
            ArtifactError::Json(_)
        ));
    }
}
