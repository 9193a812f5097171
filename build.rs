//! Build script for Nutrimix
//!
//! Bumps a build counter kept in OUT_DIR and embeds it with a timestamp.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter_path = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("build_number.txt");

    let previous: u64 = fs::read_to_string(&counter_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    if let Err(e) = fs::write(&counter_path, build_number.to_string()) {
        println!("cargo:warning=Could not persist build number: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=NUTRIMIX_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=NUTRIMIX_BUILD_TIMESTAMP={}", timestamp);
}
