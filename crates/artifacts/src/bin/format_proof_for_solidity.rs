//! Utility to format a Groth16 proof for Solidity contract submission
//!
//! Reads a binary BN254 proof and emits the three-line decimal layout the
//! verifier contract takes (proof words, commitments, commitment PoK), or
//! with `--hex` the ABI-packed calldata of the eight proof words.

use std::path::PathBuf;

use clap::Parser;
use zkverifier_artifacts::solidity::{proof_calldata_hex, proof_to_solidity_string};
use zkverifier_artifacts::{read_proof, write_proof_as_solidity};

#[derive(Parser)]
#[command(
    name = "format_proof_for_solidity",
    about = "Format a Groth16 proof for the Solidity verifier"
)]
struct Args {
    /// Path to the serialized proof
    proof_file: PathBuf,
    /// Output path (default: stdout)
    output_file: Option<PathBuf>,
    /// Print ABI-packed calldata hex instead of decimal arrays
    #[arg(long)]
    hex: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let proof = read_proof(&args.proof_file)?;
    tracing::debug!(commitments = proof.commitments.len(), "proof loaded");

    if args.hex {
        let calldata = proof_calldata_hex(&proof);
        match args.output_file {
            Some(path) => {
                let mut file = zkverifier_artifacts::open_for_create_or_overwrite(&path)?;
                std::io::Write::write_all(&mut file, calldata.as_bytes())?;
                eprintln!("Proof calldata saved to: {}", path.display());
            }
            None => println!("{}", calldata),
        }
        return Ok(());
    }

    match args.output_file {
        Some(path) => {
            write_proof_as_solidity(&proof, &path)?;
            eprintln!("Proof formatted and saved to: {}", path.display());
        }
        None => println!("{}", proof_to_solidity_string(&proof)),
    }

    Ok(())
}
