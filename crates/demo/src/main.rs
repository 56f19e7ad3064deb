use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use zkverifier_artifacts::ExportConfig;
use zkverifier_demo::run;

#[derive(Parser)]
#[command(name = "zkverifier-demo", about = "Prove x^3 + x + 5 = y and export every artifact")]
struct Cli {
    /// Secret input x
    #[arg(default_value_t = 3)]
    x: u64,
    /// Artifact output directory (overrides ARTIFACTS_DIR)
    #[arg(long)]
    out: Option<PathBuf>,
    /// Key store directory (overrides GROTH16_KEYS_DIR)
    #[arg(long)]
    keys_dir: Option<PathBuf>,
    /// Run setup even when keys exist
    #[arg(long, env = "FORCE_REGENERATE_KEYS")]
    force_regenerate_keys: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let mut config = ExportConfig::default();
    if let Some(out) = cli.out {
        config = config.with_output_dir(out);
    }
    if let Some(dir) = cli.keys_dir {
        config = config.with_keys_dir(dir);
    }

    let mut rng = StdRng::from_entropy();
    let report = run(&config, cli.x, cli.force_regenerate_keys, &mut rng)?;

    println!("Circuit: {} constraints", report.num_constraints);
    println!(
        "Keys: {}",
        if report.keys_generated { "generated" } else { "loaded" }
    );
    println!("Proof verified: {}", report.verified);
    for path in &report.written {
        println!("   - {}", path.display());
    }

    Ok(())
}
