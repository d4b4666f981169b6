//! Packaging consistency checks for the linker version script.

use std::path::PathBuf;

fn manifest_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

fn global_symbols(map: &str) -> Vec<String> {
    let global = map
        .split("global:")
        .nth(1)
        .expect("version script has a global section")
        .split("local:")
        .next()
        .expect("version script has a local section");
    global
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn version_script_matches_the_exported_surface() {
    let map = std::fs::read_to_string(manifest_path("version_scripts/ctype.map"))
        .expect("version script present");
    let mut symbols = global_symbols(&map);
    symbols.sort();

    let mut expected: Vec<String> = [
        "isalnum", "isalpha", "isblank", "iscntrl", "isdigit", "isgraph", "islower", "isprint",
        "ispunct", "isspace", "isupper", "isxdigit", "tolower", "toupper", "__errno_location",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    expected.sort();

    assert_eq!(symbols, expected);
    assert!(map.contains("local:"), "unlisted symbols must stay local");
}

/// The exports are `no_mangle` only under `not(debug_assertions)`; a debug
/// cdylib defines none of the script's symbols, so the build script must
/// apply the script only to release links or debug builds cannot link.
#[test]
fn version_script_is_gated_to_release_links() {
    let build = std::fs::read_to_string(manifest_path("build.rs")).expect("build script present");
    let applies_script = build.contains("--version-script");
    let gated_on_profile = build.contains(r#"std::env::var("PROFILE")"#);
    assert!(
        !applies_script || gated_on_profile,
        "build.rs applies the version script without checking the build profile"
    );
}
