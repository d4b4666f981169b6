//! Literal boundary scenarios and cross-class consistency.

use ferroctype_harness::domain::{self, lookup};

#[test]
fn literal_boundary_table() {
    // (symbol, input, expected)
    let table: &[(&str, i32, i32)] = &[
        ("isalnum", 47, 0),
        ("isalnum", 48, 1),
        ("isalnum", 57, 1),
        ("isalnum", 58, 0),
        ("isalnum", 64, 0),
        ("isalnum", 65, 1),
        ("isalnum", 90, 1),
        ("isalnum", 91, 0),
        ("isalnum", 96, 0),
        ("isalnum", 97, 1),
        ("isalnum", 122, 1),
        ("isalnum", 123, 0),
        ("iscntrl", 0, 1),
        ("iscntrl", 31, 1),
        ("iscntrl", 32, 0),
        ("iscntrl", 126, 0),
        ("iscntrl", 127, 1),
        ("iscntrl", 128, 0),
        ("isxdigit", 47, 0),
        ("isxdigit", 48, 1),
        ("isxdigit", 57, 1),
        ("isxdigit", 58, 0),
        ("isxdigit", 64, 0),
        ("isxdigit", 65, 1),
        ("isxdigit", 70, 1),
        ("isxdigit", 71, 0),
        ("isxdigit", 96, 0),
        ("isxdigit", 97, 1),
        ("isxdigit", 102, 1),
        ("isxdigit", 103, 0),
        ("isblank", 8, 0),
        ("isblank", 9, 1),
        ("isblank", 10, 0),
        ("isblank", 32, 1),
        ("isblank", 33, 0),
        ("isspace", 8, 0),
        ("isspace", 9, 1),
        ("isspace", 13, 1),
        ("isspace", 14, 0),
        ("isspace", 32, 1),
        ("isprint", 31, 0),
        ("isprint", 32, 1),
        ("isprint", 126, 1),
        ("isprint", 127, 0),
        ("isgraph", 32, 0),
        ("isgraph", 33, 1),
        ("isgraph", 126, 1),
        ("isgraph", 127, 0),
        ("toupper", 97, 65),
        ("toupper", 122, 90),
        ("toupper", 65, 65),
        ("tolower", 65, 97),
        ("tolower", 90, 122),
        ("tolower", 48, 48),
    ];
    for &(name, input, expected) in table {
        let sym = lookup(name).expect("registered symbol");
        assert_eq!(sym.eval(input), expected, "{name}({input})");
    }
}

/// The compound classes decompose exactly into their constituents over the
/// whole sweep domain, out-of-range inputs included.
#[test]
fn family_consistency_over_sweep_domain() {
    let isalnum = lookup("isalnum").unwrap();
    let isalpha = lookup("isalpha").unwrap();
    let isdigit = lookup("isdigit").unwrap();
    let isupper = lookup("isupper").unwrap();
    let islower = lookup("islower").unwrap();
    let isgraph = lookup("isgraph").unwrap();
    let isprint = lookup("isprint").unwrap();

    for c in domain::sweep_domain() {
        assert_eq!(
            isalnum.eval(c),
            i32::from(isalpha.eval(c) == 1 || isdigit.eval(c) == 1),
            "alnum decomposition at {c}"
        );
        assert_eq!(
            isalpha.eval(c),
            i32::from(isupper.eval(c) == 1 || islower.eval(c) == 1),
            "alpha decomposition at {c}"
        );
        assert_eq!(
            isgraph.eval(c),
            i32::from(isprint.eval(c) == 1 && c != 32),
            "graph decomposition at {c}"
        );
    }
}

/// Standard-disjoint classes never both claim a byte.
#[test]
fn pairwise_disjointness_over_byte_domain() {
    let disjoint: &[(&str, &str)] = &[
        ("iscntrl", "isprint"),
        ("iscntrl", "isalnum"),
        ("iscntrl", "ispunct"),
        ("isdigit", "isalpha"),
        ("isdigit", "ispunct"),
        ("isupper", "islower"),
        ("isspace", "isalnum"),
        ("isspace", "isgraph"),
        ("ispunct", "isalnum"),
    ];
    for &(a_name, b_name) in disjoint {
        let a = lookup(a_name).unwrap();
        let b = lookup(b_name).unwrap();
        for c in 0..=255 {
            assert!(
                !(a.eval(c) == 1 && b.eval(c) == 1),
                "{a_name} and {b_name} both claim {c}"
            );
        }
    }
}
