// Entry points take plain integers from C callers; there is nothing a caller
// can get wrong that the byte-domain clamp does not absorb, so per-function
// safety docs would be empty boilerplate.
#![allow(clippy::missing_safety_doc)]
//! # ferroctype-abi
//!
//! ABI-compatible `extern "C"` boundary layer for ferroctype.
//!
//! This crate produces a `cdylib` that exposes the `<ctype.h>` symbols. Each
//! entry point accepts the full `c_int` domain, clamps to the byte domain,
//! and delegates to the safe implementations in `ferroctype-core`.
//!
//! # Architecture
//!
//! ```text
//! C caller -> ABI entry (this crate) -> byte-domain clamp -> core impl -> return
//! ```
//!
//! Symbols carry `no_mangle` only in release builds so debug test binaries do
//! not shadow the host libc definitions they are compared against.

pub mod ctype_abi;
pub mod errno_abi;
