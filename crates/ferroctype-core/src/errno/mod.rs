//! Error number definitions.
//!
//! Implements `<errno.h>` support with thread-local errno storage. The
//! classification functions never touch errno; the cell exists so callers of
//! the C surface get the storage the header promises, zero-initialized per
//! thread.

use std::cell::Cell;

thread_local! {
    static ERRNO: Cell<i32> = const { Cell::new(0) };
}

/// Well-known errno constants.
pub const EPERM: i32 = 1;
pub const ENOENT: i32 = 2;
pub const EINTR: i32 = 4;
pub const EIO: i32 = 5;
pub const EBADF: i32 = 9;
pub const EAGAIN: i32 = 11;
pub const ENOMEM: i32 = 12;
pub const EACCES: i32 = 13;
pub const EFAULT: i32 = 14;
pub const EINVAL: i32 = 22;
pub const EDOM: i32 = 33;
pub const ERANGE: i32 = 34;

/// Returns the current thread-local errno value.
pub fn get_errno() -> i32 {
    ERRNO.get()
}

/// Sets the current thread-local errno value.
pub fn set_errno(value: i32) {
    ERRNO.set(value);
}

/// Returns a pointer to the calling thread's errno cell.
///
/// This is the storage `__errno_location` hands to C callers; it must be the
/// same cell `get_errno`/`set_errno` read and write. The pointer is valid for
/// the lifetime of the calling thread.
pub fn errno_location() -> *mut i32 {
    ERRNO.with(Cell::as_ptr)
}
