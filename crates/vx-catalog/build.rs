// Build script: embeds the language catalog parsed from the SQL seed.
//
// Set VOXLINK_LANGUAGE_SEED to point at an alternative seed file.

#[path = "buildtools/mod.rs"]
mod buildtools;

use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_SEED: &str = "seed/002_language_seed.sql";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={DEFAULT_SEED}");
    println!("cargo:rerun-if-changed=buildtools");
    println!("cargo:rerun-if-env-changed=VOXLINK_LANGUAGE_SEED");

    let seed_path =
        env::var("VOXLINK_LANGUAGE_SEED").unwrap_or_else(|_| DEFAULT_SEED.to_string());
    let sql = fs::read_to_string(&seed_path)
        .map_err(|e| format!("failed to read language seed {seed_path}: {e}"))?;

    let languages = buildtools::parse_seed(&sql)?;
    let code = buildtools::generate_catalog_code(&languages, &seed_path)?;

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::write(out_dir.join("catalog_data.rs"), code)?;

    Ok(())
}
