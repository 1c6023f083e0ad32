//! Linux entropy via the `getrandom` system call.

use std::io;

use libc::{c_void, getrandom};

use crate::error::EntropyError;

/// Fills a buffer with cryptographically secure random bytes from the
/// kernel.
///
/// Partial reads and `EINTR` are retried until the buffer is full. Any
/// other failure is reported to the caller.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    let mut filled = 0;

    while filled < buf.len() {
        let rest = &mut buf[filled..];
        // SAFETY: `rest` is a valid, writable region of exactly `rest.len()` bytes.
        let ret = unsafe { getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0) };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(EntropyError(err));
        }

        filled += ret as usize;
    }

    Ok(())
}
