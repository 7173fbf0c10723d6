//! Mutex helpers.
//!
//! The only lock in this crate guards the log sink of
//! [`crate::logging::PaletteLogger`]. A panic while writing a log line must not
//! silence every later line, so poisoned locks are recovered instead of
//! propagated.

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use palette_studio::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub fn lock_recover<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
