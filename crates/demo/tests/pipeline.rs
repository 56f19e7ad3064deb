use std::fs;

use ark_std::rand::{rngs::StdRng, SeedableRng};
use zkverifier_artifacts::{read_constraint_system, read_proof, ArtifactKind, ExportConfig};
use zkverifier_demo::{compile, public_witness, run, CubicCircuit};
use zkverifier_types::Fr;

fn config(tmp: &tempfile::TempDir) -> ExportConfig {
    ExportConfig::default()
        .with_output_dir(tmp.path().join("build"))
        .with_keys_dir(tmp.path().join("keys"))
}

#[test]
fn compiled_circuit_has_one_public_input() {
    let r1cs = compile().unwrap();
    assert_eq!(r1cs.num_constraints, 3);
    assert_eq!(r1cs.num_public_inputs(), 1);
    assert_eq!(r1cs.num_witness_variables, 3);
}

#[test]
fn public_witness_is_circuit_output() {
    let witness = public_witness(CubicCircuit::new(3)).unwrap();
    assert_eq!(witness.vector(), &[Fr::from(35u64)]);
}

#[test]
fn run_writes_every_artifact() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(&tmp);
    let mut rng = StdRng::seed_from_u64(11);

    let report = run(&config, 3, false, &mut rng).unwrap();
    assert!(report.verified);
    assert!(report.keys_generated);
    assert_eq!(report.written.len(), 6);
    for path in &report.written {
        assert!(path.exists(), "{} missing", path.display());
    }

    let json = fs::read_to_string(config.path_for(ArtifactKind::PublicWitness)).unwrap();
    assert_eq!(json, r#"["35"]"#);

    let r1cs = read_constraint_system(config.path_for(ArtifactKind::ConstraintSystem)).unwrap();
    assert_eq!(r1cs, compile().unwrap());

    let text = fs::read_to_string(config.path_for(ArtifactKind::ProofSolidity)).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert_eq!(text.lines().nth(1), Some("[]"));

    let contract =
        fs::read_to_string(config.path_for(ArtifactKind::VerifyingKeySolidity)).unwrap();
    assert!(contract.contains("uint256[1] calldata input"));
}

#[test]
fn second_run_reuses_keys_and_overwrites_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(&tmp);
    let mut rng = StdRng::seed_from_u64(12);

    run(&config, 3, false, &mut rng).unwrap();
    let first = read_proof(config.path_for(ArtifactKind::Proof)).unwrap();

    let report = run(&config, 4, false, &mut rng).unwrap();
    assert!(!report.keys_generated);
    assert_eq!(report.public_inputs.vector(), &[Fr::from(73u64)]);

    let second = read_proof(config.path_for(ArtifactKind::Proof)).unwrap();
    assert_ne!(first, second);
}
