//! Build script for the cairo-vg crate.
//!
//! Links against the system cairo library. Set `CAIRO_LIB_DIR` to point
//! at a non-standard install location.

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=CAIRO_LIB_DIR");
    println!("cargo:rerun-if-env-changed=CAIRO_STATIC");

    if let Ok(dir) = env::var("CAIRO_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
    }

    // On macOS a Homebrew install is not on the default search path.
    #[cfg(target_os = "macos")]
    {
        for prefix in ["/opt/homebrew", "/usr/local"] {
            let lib = format!("{}/lib", prefix);
            if std::path::Path::new(&format!("{}/libcairo.dylib", lib)).exists() {
                println!("cargo:rustc-link-search=native={}", lib);
                break;
            }
        }
    }

    let kind = if env::var_os("CAIRO_STATIC").is_some() {
        "static"
    } else {
        "dylib"
    };
    println!("cargo:rustc-link-lib={}=cairo", kind);
}
