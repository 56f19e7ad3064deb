//! Utility to export a Groth16 verifying key as a Solidity verifier contract
//!
//! Takes either a verifying key file or, with `--keys-dir`, the key store
//! written by the setup step.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use zkverifier_artifacts::keys::VERIFYING_KEY_FILE;
use zkverifier_artifacts::verifier::DEFAULT_CONTRACT_NAME;
use zkverifier_artifacts::{
    read_verifying_key, write_verifying_key_as_solidity_with, ExportSolidity,
    SolidityVerifierOptions,
};

#[derive(Parser)]
#[command(name = "export_verifying_key", about = "Export a Groth16 verifying key as Solidity")]
struct Args {
    /// Path to the serialized verifying key
    #[arg(required_unless_present = "keys_dir")]
    vk_file: Option<PathBuf>,
    /// Output path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Read the verifying key from a key store directory instead
    /// (ignored when a file is given)
    #[arg(long, env = "GROTH16_KEYS_DIR")]
    keys_dir: Option<PathBuf>,
    /// Name of the generated contract
    #[arg(long, env = "VERIFIER_CONTRACT_NAME", default_value = DEFAULT_CONTRACT_NAME)]
    contract_name: String,
}

impl Args {
    /// An explicit file wins over the key store directory.
    fn vk_path(&self) -> anyhow::Result<PathBuf> {
        match (&self.vk_file, &self.keys_dir) {
            (Some(file), _) => Ok(file.clone()),
            (None, Some(dir)) => Ok(dir.join(VERIFYING_KEY_FILE)),
            (None, None) => anyhow::bail!("either a verifying key file or --keys-dir is required"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let vk_path = args.vk_path()?;
    let vk = read_verifying_key(&vk_path)
        .with_context(|| format!("loading verifying key from {}", vk_path.display()))?;

    let options = SolidityVerifierOptions {
        contract_name: args.contract_name,
    };

    match args.output {
        Some(path) => {
            write_verifying_key_as_solidity_with(&vk, &path, &options)?;
            eprintln!(
                "Verifier for {} public inputs saved to: {}",
                vk.gamma_abc_g1.len().saturating_sub(1),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            vk.export_solidity_with(&mut stdout.lock(), &options)?;
        }
    }

    Ok(())
}
