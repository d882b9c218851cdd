use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/types.rs");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string()));

    let config = cbindgen::Config {
        language: cbindgen::Language::C,
        include_guard: Some("TEAMS_FFI_H".to_string()),
        ..Default::default()
    };

    match cbindgen::generate_with_config(&crate_dir, config) {
        Ok(bindings) => {
            bindings.write_to_file(out_dir.join("teams_ffi.h"));
        }
        Err(e) => println!("cargo:warning=header generation skipped: {e}"),
    }
}
