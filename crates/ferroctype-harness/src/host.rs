//! Host libc reference evaluation.
//!
//! All `libc` calls live here. Host classification returns the raw ctype
//! table bit, so predicate results are normalized to 0/1 before they leave
//! this module; conversions pass through untouched. Inputs must stay inside
//! the symbol's host-parity domain — the host tables cover nothing beyond
//! EOF and the char range, and the conversion tables alias sign-extended
//! negatives to their unsigned counterparts, which is not comparable against
//! the identity contract.

use crate::domain;
use crate::error::HarnessError;

/// Evaluate a host libc symbol for one input.
pub fn eval(name: &str, c: i32) -> Result<i32, HarnessError> {
    eval_symbol(domain::lookup(name)?, c)
}

/// Evaluate a registry symbol against the host.
pub fn eval_symbol(sym: &domain::Symbol, c: i32) -> Result<i32, HarnessError> {
    if !sym.host_parity_defined(c) {
        return Err(HarnessError::HostDomain { input: c });
    }
    let raw = unsafe {
        match sym.name {
            "isalnum" => libc::isalnum(c),
            "isalpha" => libc::isalpha(c),
            "isblank" => libc::isblank(c),
            "iscntrl" => libc::iscntrl(c),
            "isdigit" => libc::isdigit(c),
            "isgraph" => libc::isgraph(c),
            "islower" => libc::islower(c),
            "isprint" => libc::isprint(c),
            "ispunct" => libc::ispunct(c),
            "isspace" => libc::isspace(c),
            "isupper" => libc::isupper(c),
            "isxdigit" => libc::isxdigit(c),
            "tolower" => return Ok(libc::tolower(c)),
            "toupper" => return Ok(libc::toupper(c)),
            other => return Err(HarnessError::UnknownSymbol(other.to_string())),
        }
    };
    Ok(i32::from(raw != 0))
}
