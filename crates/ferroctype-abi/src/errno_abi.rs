//! ABI layer for `<errno.h>` — thread-local errno storage.
//!
//! The classification entry points never write errno; this accessor exists so
//! C callers linking the cdylib get the storage `<errno.h>` promises. It hands
//! out the same per-thread cell `ferroctype_core::errno` reads and writes, so
//! `set_errno` in Rust is visible through the C surface and vice versa. The
//! pointer is stable for the lifetime of the calling thread and the cell is
//! zero-initialized.

use std::ffi::c_int;

use ferroctype_core::errno;

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn __errno_location() -> *mut c_int {
    errno::errno_location()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_location_is_stable_and_zero_initialized() {
        unsafe {
            let p1 = __errno_location();
            let p2 = __errno_location();
            assert_eq!(p1, p2);
            assert_eq!(*p1, 0);
            *p1 = errno::EINVAL;
            assert_eq!(*__errno_location(), errno::EINVAL);
            *p1 = 0;
        }
    }

    #[test]
    fn errno_location_is_per_thread() {
        unsafe {
            *__errno_location() = errno::ERANGE;
        }
        std::thread::spawn(|| unsafe {
            assert_eq!(*__errno_location(), 0);
        })
        .join()
        .expect("errno worker thread panicked");
        unsafe {
            assert_eq!(*__errno_location(), errno::ERANGE);
            *__errno_location() = 0;
        }
    }

    #[test]
    fn errno_location_shares_the_core_cell() {
        errno::set_errno(errno::EDOM);
        unsafe {
            assert_eq!(*__errno_location(), errno::EDOM);
            *__errno_location() = errno::EBADF;
        }
        assert_eq!(errno::get_errno(), errno::EBADF);
        errno::set_errno(0);
    }
}
