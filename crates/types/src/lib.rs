mod constants;
mod proof;
mod r1cs;
mod witness;

pub use constants::*;
pub use proof::Proof;
pub use r1cs::R1csArtifact;
pub use witness::PublicWitness;

pub use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};

pub type VerifyingKey = ark_groth16::VerifyingKey<Bn254>;
pub type ProvingKey = ark_groth16::ProvingKey<Bn254>;

/// Sparse R1CS matrix: one row per constraint, `(coefficient, variable index)` pairs.
pub type Matrix = Vec<Vec<(Fr, usize)>>;
