//! End-to-end Groth16 export workflow on a toy circuit.
//!
//! Mirrors what an operator does with separate tools: compile the circuit,
//! run setup, prove, verify off-chain, then hand every artifact to the
//! Solidity side.

pub mod circuit;

use std::path::PathBuf;

use anyhow::{ensure, Context};
use ark_groth16::Groth16;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem, SynthesisMode};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use tracing::info;
use zkverifier_artifacts::{
    read_proof, write_constraint_system, write_proof, write_proof_as_solidity,
    write_public_witness_as_json, write_verifying_key, write_verifying_key_as_solidity_with,
    ArtifactKind, ExportConfig, KeyStore,
};
use zkverifier_types::{Bn254, Fr, Proof, PublicWitness, R1csArtifact};

pub use circuit::CubicCircuit;

/// What a run produced.
#[derive(Debug)]
pub struct DemoReport {
    pub public_inputs: PublicWitness,
    pub num_constraints: usize,
    pub keys_generated: bool,
    pub verified: bool,
    pub written: Vec<PathBuf>,
}

/// Constraint matrices of the circuit shape, no assignment needed.
pub fn compile() -> anyhow::Result<R1csArtifact> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    cs.set_mode(SynthesisMode::Setup);
    CubicCircuit::empty()
        .generate_constraints(cs.clone())
        .context("synthesizing circuit")?;
    Ok(R1csArtifact::from_constraint_system(&cs)?)
}

/// Public inputs the prover commits to for `circuit`.
pub fn public_witness(circuit: CubicCircuit) -> anyhow::Result<PublicWitness> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    circuit
        .generate_constraints(cs.clone())
        .context("assigning witness")?;
    ensure!(cs.is_satisfied()?, "witness does not satisfy the circuit");
    PublicWitness::from_constraint_system(&cs).context("constraint system has no assignment")
}

pub fn run<R: RngCore + CryptoRng>(
    config: &ExportConfig,
    x: u64,
    force_regenerate_keys: bool,
    rng: &mut R,
) -> anyhow::Result<DemoReport> {
    let r1cs = compile()?;
    info!(constraints = r1cs.num_constraints, "circuit compiled");

    let mut keys = KeyStore::new(Some(config.keys_dir.clone()));
    let keys_generated = keys.load_or_setup(CubicCircuit::empty(), force_regenerate_keys, rng)?;
    let pk = keys.proving_key()?;
    let vk = keys.verifying_key()?;

    let circuit = CubicCircuit::new(x);
    let witness = public_witness(circuit.clone())?;
    let groth = Groth16::<Bn254>::prove(pk, circuit, rng).context("proving")?;
    let verified = Groth16::<Bn254>::verify(vk, witness.vector(), &groth).context("verifying")?;
    info!(verified, "proof generated");
    ensure!(verified, "freshly generated proof failed verification");

    let proof = Proof::from(groth);
    let path = |kind: ArtifactKind| config.path_for(kind);

    write_constraint_system(&r1cs, path(ArtifactKind::ConstraintSystem))?;
    write_proof(&proof, path(ArtifactKind::Proof))?;
    write_proof_as_solidity(&proof, path(ArtifactKind::ProofSolidity))?;
    write_verifying_key(vk, path(ArtifactKind::VerifyingKey))?;
    write_verifying_key_as_solidity_with(
        vk,
        path(ArtifactKind::VerifyingKeySolidity),
        &config.solidity_options(),
    )?;
    write_public_witness_as_json(&witness, path(ArtifactKind::PublicWitness))?;

    let reread = read_proof(path(ArtifactKind::Proof))?;
    ensure!(reread == proof, "proof changed across write and read");

    Ok(DemoReport {
        public_inputs: witness,
        num_constraints: r1cs.num_constraints,
        keys_generated,
        verified,
        written: [
            ArtifactKind::ConstraintSystem,
            ArtifactKind::Proof,
            ArtifactKind::ProofSolidity,
            ArtifactKind::VerifyingKey,
            ArtifactKind::VerifyingKeySolidity,
            ArtifactKind::PublicWitness,
        ]
        .into_iter()
        .map(path)
        .collect(),
    })
}
