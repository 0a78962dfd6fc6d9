//! Build script for newsworld
//!
//! Bakes the NewsAPI key into the binary. The key comes from `NEWS_API_KEY`
//! in `local.properties` at the crate root, or from the build environment.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=local.properties");
    println!("cargo:rerun-if-env-changed=NEWS_API_KEY");

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let properties = Path::new(&manifest_dir).join("local.properties");

    let from_file = fs::read_to_string(&properties)
        .ok()
        .and_then(|content| read_property(&content, "NEWS_API_KEY"));

    if let Some(key) = from_file.or_else(|| std::env::var("NEWS_API_KEY").ok()) {
        println!("cargo:rustc-env=NEWS_API_KEY={}", key);
    }
}

/// Java-style `key=value` lookup; `#` and `!` start comments.
fn read_property(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| line.split_once('=').or_else(|| line.split_once(':')))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
