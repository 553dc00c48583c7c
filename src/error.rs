//! Error types reported by delegate operations.
//!
//! The runtime surface is deliberately small: signature mismatches are
//! compile errors, a panicking callback propagates as a panic, and the
//! blocking operations cannot fail. What remains is contention reported
//! by the non-blocking variants.

use thiserror::Error;

/// # Errors produced by delegate operations.
///
/// Returned only by the non-blocking operations of
/// [`SyncDelegate`](crate::SyncDelegate); everything else either succeeds
/// or is rejected at compile time.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DelegateError {
    /// The delegate lock was already held when a non-blocking call ran,
    /// either by another thread's operation or re-entrantly by the
    /// current one.
    #[error("delegate is busy: another operation holds the lock")]
    Busy,
}

impl DelegateError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use fanout::DelegateError;
    ///
    /// assert_eq!(DelegateError::Busy.as_label(), "delegate_busy");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DelegateError::Busy => "delegate_busy",
        }
    }
}
