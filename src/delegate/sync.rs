//! # Mutex-wrapped multicast delegate.
//!
//! [`SyncDelegate`] offers the exact [`Delegate`] contract to concurrent
//! callers. It holds the single-threaded container by value behind one
//! mutex, so the unlocked API is never reachable, and every public
//! operation keeps the lock for its entire duration.
//!
//! ## Architecture
//! ```text
//!  thread A ── register_keyed ──┐
//!  thread B ── remove ──────────┼──► Mutex<Delegate<A>> ──► entry list
//!  thread C ── notify_all ──────┘        (one coarse lock,
//!                                         held end-to-end)
//! ```
//!
//! ## Rules
//! - **Linearized**: no caller ever observes a partially-mutated entry
//!   list; the outcome of any interleaving matches some total order of
//!   the individual operations.
//! - **Serialized passes**: `notify_all` keeps the lock across the full
//!   execution of every callback, so registrations and removals wait for
//!   an in-flight pass and two passes never run concurrently.
//! - **Re-entrancy hazard**: a callback that calls back into the same
//!   `SyncDelegate` (directly or transitively) deadlocks on the lock.
//!   This is not detected; use [`try_notify_all`](SyncDelegate::try_notify_all)
//!   where re-entrancy cannot be ruled out.
//! - **Panics**: a panicking callback unwinds out of the pass; the lock
//!   is released on unwind (no poisoning) and the delegate stays usable.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::delegate::key::Key;
use crate::delegate::unsync::Delegate;
use crate::error::DelegateError;

/// Thread-safe multicast callback container.
///
/// All operations take `&self`; share the delegate between threads with
/// `Arc<SyncDelegate<_>>`.
///
/// ## Example
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
/// use fanout::SyncDelegate;
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let delegate = Arc::new(SyncDelegate::new());
/// {
///     let hits = Arc::clone(&hits);
///     delegate.register(move |_: &u32| {
///         hits.fetch_add(1, Ordering::Relaxed);
///     });
/// }
///
/// let publisher = {
///     let delegate = Arc::clone(&delegate);
///     thread::spawn(move || delegate.notify_all(&7))
/// };
/// publisher.join().unwrap();
///
/// assert_eq!(hits.load(Ordering::Relaxed), 1);
/// ```
pub struct SyncDelegate<A> {
    inner: Mutex<Delegate<A>>,
}

impl<A> SyncDelegate<A> {
    /// Creates an empty delegate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Delegate::new()),
        }
    }

    /// Creates an empty delegate with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Delegate::with_capacity(capacity)),
        }
    }

    /// Registers a free callback with no removal key.
    ///
    /// See [`Delegate::register`].
    pub fn register<F>(&self, callback: F)
    where
        F: Fn(&A) + Send + 'static,
    {
        self.inner.lock().register(callback);
    }

    /// Registers a free callback under a caller-chosen removal key.
    ///
    /// See [`Delegate::register_keyed`].
    pub fn register_keyed<F>(&self, key: Key, callback: F)
    where
        F: Fn(&A) + Send + 'static,
    {
        self.inner.lock().register_keyed(key, callback);
    }

    /// Registers a method of an `Arc`-held instance, keyed by the
    /// instance address.
    ///
    /// See [`Delegate::register_bound`].
    pub fn register_bound<T, F>(&self, target: &Arc<T>, method: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&T, &A) + Send + 'static,
    {
        self.inner.lock().register_bound(target, method);
    }

    /// Invokes every entry in registration order with the same arguments.
    ///
    /// Holds the lock for the whole pass, including the execution of each
    /// callback: concurrent registrations, removals and passes wait until
    /// this one finishes.
    ///
    /// ### Notes
    /// Calling back into this delegate from inside a callback deadlocks.
    /// [`try_notify_all`](Self::try_notify_all) is the non-blocking
    /// alternative.
    pub fn notify_all(&self, args: &A) {
        self.inner.lock().notify_all(args);
    }

    /// Runs a notification pass only if the lock is free.
    ///
    /// Returns [`DelegateError::Busy`] without blocking when another
    /// operation — possibly on this very thread — holds the lock.
    pub fn try_notify_all(&self, args: &A) -> Result<(), DelegateError> {
        let inner = self.inner.try_lock().ok_or(DelegateError::Busy)?;
        inner.notify_all(args);
        Ok(())
    }

    /// Removes every entry whose key equals `key`; returns the count.
    ///
    /// See [`Delegate::remove`].
    pub fn remove(&self, key: Key) -> usize {
        self.inner.lock().remove(key)
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` when no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<A> Default for SyncDelegate<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps an already-populated single-threaded delegate.
impl<A> From<Delegate<A>> for SyncDelegate<A> {
    fn from(inner: Delegate<A>) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }
}
