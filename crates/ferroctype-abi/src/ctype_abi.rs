//! ABI layer for `<ctype.h>` character classification and conversion.
//!
//! Pure compute — no pointers, no errno traffic, no allocation. Each function
//! clamps the `c_int` argument to the byte domain and delegates to
//! `ferroctype_core::ctype`. Classification entry points return exactly 0 or
//! 1; conversions return the argument unchanged outside the byte domain.

use std::ffi::c_int;

/// Integer-domain guard shared by every classification entry point.
///
/// C permits any `int` argument. A value outside 0..=255 is never a member
/// of any class, so it short-circuits to 0 instead of faulting.
#[inline]
fn classify(c: c_int, f: fn(u8) -> bool) -> c_int {
    if !(0..=255).contains(&c) {
        return 0;
    }
    c_int::from(f(c as u8))
}

/// Conversions are the identity outside the byte domain.
#[inline]
fn convert(c: c_int, f: fn(u8) -> u8) -> c_int {
    if !(0..=255).contains(&c) {
        return c;
    }
    c_int::from(f(c as u8))
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isalnum(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_alnum)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isalpha(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_alpha)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isblank(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_blank)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn iscntrl(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_cntrl)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isdigit(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_digit)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isgraph(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_graph)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn islower(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_lower)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isprint(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_print)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn ispunct(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_punct)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isspace(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_space)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isupper(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_upper)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isxdigit(c: c_int) -> c_int {
    classify(c, ferroctype_core::ctype::is_xdigit)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn toupper(c: c_int) -> c_int {
    convert(c, ferroctype_core::ctype::to_upper)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn tolower(c: c_int) -> c_int {
    convert(c, ferroctype_core::ctype::to_lower)
}
