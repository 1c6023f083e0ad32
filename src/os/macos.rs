use libc::arc4random_buf;

use crate::error::EntropyError;

/// `arc4random_buf` cannot fail, so this always succeeds.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    // SAFETY: `buf` is a valid, writable region of exactly `buf.len()` bytes.
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
