use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Cargo scans a directory path recursively, so any template edit rebuilds.
    println!("cargo:rerun-if-changed=templates");
    println!("cargo:rerun-if-changed=build.rs");

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    println!("cargo:rustc-env=ACTIVITIES_CLIENT_BUILD_ID={}+{}", version, stamp);
}
