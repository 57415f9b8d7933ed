#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Largest capacity a store header can describe
const MAX_CAPACITY: u32 = u16::MAX as u32;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_block_size(&outdir_path, "block_size.rs")?;
    Ok(())
}

/// Create block_size.rs, containing definition of constant BLOCK_SIZE
fn write_block_size(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let block_size = env::var("RUST_BIGINT_REP_BLOCK_SIZE")
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_BIGINT_REP_BLOCK_SIZE must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(8u32);

    assert!(
        block_size <= MAX_CAPACITY,
        "$RUST_BIGINT_REP_BLOCK_SIZE must not exceed {}", MAX_CAPACITY
    );

    let block_size_rs_path = outdir_path.join(filename);

    let block_size_def = format!("pub const BLOCK_SIZE: usize = {block_size};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&block_size_rs_path) {
        Ok(existing_contents) if existing_contents == block_size_def => {},
        _ => {
            let mut block_size_rs = File::create(&block_size_rs_path)
                .expect("Could not create block_size.rs");
            write!(block_size_rs, "{block_size_def}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", block_size_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BIGINT_REP_BLOCK_SIZE");

    Ok(())
}
