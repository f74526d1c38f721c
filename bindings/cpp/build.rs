use std::env;
use std::fs;
use std::path::PathBuf;

const HEADER: &str = "numkernel.h";

fn main() {
    let crate_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is not set"));
    let include_dir = crate_dir.join("include");
    fs::create_dir_all(&include_dir).expect("Unable to create include directory");

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))
        .expect("Unable to read cbindgen.toml");

    // C header consumed by include/numkernel.hpp
    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("cbindgen failed to generate numkernel.h")
        .write_to_file(include_dir.join(HEADER));

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
