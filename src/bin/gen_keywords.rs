// src/bin/gen_keywords.rs
// Regenerate both keyword mapping headers from the master dictionary.
// Usage:
//   cargo run --bin gen_keywords              # dictionary next to Cargo.toml
//   cargo run --bin gen_keywords -- /path/dir # dictionary + outputs in /path/dir

use std::{env, path::PathBuf, process};

use anyhow::{Context, Result};
use klang_keywords::{load_dict, save_c2k_header, save_klang_header};

fn run() -> Result<()> {
    let base = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    let dict_path = base.join("keywords.dict");
    let c_header = base.join("keywords.h");
    let k_header = base.join("keywords.nac");

    println!("[gen_keywords] reading dictionary from: {}", dict_path.display());
    let table = load_dict(&dict_path)
        .with_context(|| format!("failed to read dictionary {}", dict_path.display()))?;
    println!("[gen_keywords] found {} keyword mappings", table.len());

    println!("[gen_keywords] generating C header for klang: {}", c_header.display());
    println!("[gen_keywords] generating K-compatible header (nac) for c2k: {}", k_header.display());

    // The two passes only share the read-only table and write separate
    // files; run both even if one fails.
    let (klang_res, c2k_res) = rayon::join(
        || save_klang_header(&c_header, &table),
        || save_c2k_header(&k_header, &table),
    );
    klang_res.with_context(|| format!("failed to write {}", c_header.display()))?;
    c2k_res.with_context(|| format!("failed to write {}", k_header.display()))?;

    println!("[gen_keywords] done");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
