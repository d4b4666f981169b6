fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let version_script = format!("{manifest_dir}/version_scripts/ctype.map");
    // The exports carry no_mangle only in release builds; a debug cdylib has
    // no symbols for the script to bind, so the link-arg must follow the
    // same gate.
    let release = std::env::var("PROFILE").as_deref() == Ok("release");
    if release && std::path::Path::new(&version_script).exists() {
        println!("cargo:rustc-cdylib-link-arg=-Wl,--version-script={version_script}");
    }
    println!("cargo:rerun-if-changed=version_scripts/ctype.map");
}
