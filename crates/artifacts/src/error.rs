use std::path::PathBuf;

use ark_relations::r1cs::SynthesisError;
use ark_serialize::SerializationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("stat error for {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {op} {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode {artifact}: {source}")]
    Serialization {
        artifact: &'static str,
        #[source]
        source: SerializationError,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: not a field element: {value:?}")]
    InvalidFieldElement { path: PathBuf, value: String },

    #[error("invalid verifying key: {0}")]
    InvalidVerifyingKey(&'static str),

    #[error("constraint system error: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Groth16 setup failed: {0}")]
    Setup(String),

    #[error("{0} not loaded")]
    KeysNotLoaded(&'static str),
}

impl ArtifactError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(artifact: &'static str, source: SerializationError) -> Self {
        Self::Serialization { artifact, source }
    }
}

pub type Result<T> = std::result::Result<T, ArtifactError>;
