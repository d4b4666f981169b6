//! # ferroctype-core
//!
//! Safe Rust implementations of the C `<ctype.h>` character family.
//!
//! Every predicate is a total, pure function over a single byte, matching the
//! "C" locale exactly. The full-`int` contract of the C interface (negative
//! inputs, values above 255) lives in `ferroctype-abi`, which clamps to the
//! byte domain before delegating here. No `unsafe` code is permitted at the
//! crate level.

#![deny(unsafe_code)]

pub mod ctype;
pub mod errno;
