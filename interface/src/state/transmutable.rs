// Derived from `pinocchio-token-interface` – commit 75116550519a9ee3fdfa6c819aca91e383fffa39, Apache-2.0.
// See: https://github.com/solana-program/token

use crate::error::TweetError;

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast
/// (e.g., `&*(bytes.as_ptr() as *const Self)`).
///
/// # Safety
/// **Implementor guarantees:**
/// - Use a stable layout (`#[repr(C)]` or `#[repr(transparent)]`).
/// - `LEN` bytes form a valid `Self`. Prefer `[u8; N]` and/or transparent byte wrappers.
/// - `size_of::<Self> == LEN`
/// - `align_of::<Self> == 1`
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;
}

/// Returns a reference to a `T: Transmutable` from the first `T::LEN` bytes of `bytes`.
///
/// Fails if `bytes` is shorter than `T::LEN`.
#[inline(always)]
pub fn load<T: Transmutable>(bytes: &[u8]) -> Result<&T, TweetError> {
    if bytes.len() < T::LEN {
        return Err(TweetError::InsufficientByteLength);
    }
    // Safety: The length was just checked, `T` has alignment 1 and every bit pattern is valid.
    Ok(unsafe { &*(bytes.as_ptr() as *const T) })
}

/// Returns a mutable reference to a `T: Transmutable` from the first `T::LEN` bytes of `bytes`.
///
/// Fails if `bytes` is shorter than `T::LEN`.
#[inline(always)]
pub fn load_mut<T: Transmutable>(bytes: &mut [u8]) -> Result<&mut T, TweetError> {
    if bytes.len() < T::LEN {
        return Err(TweetError::InsufficientByteLength);
    }
    // Safety: The length was just checked, `T` has alignment 1 and every bit pattern is valid.
    Ok(unsafe { &mut *(bytes.as_mut_ptr() as *mut T) })
}
