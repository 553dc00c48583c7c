//! # LogTap — notification logger
//!
//! A minimal tap that registers a [`log`] callback into a delegate.
//! Use it for test or demo wiring; real consumers register their own
//! callbacks.
//!
//! ## Example output
//! ```text
//! DEBUG app::readings: notify: 21.5
//! DEBUG app::readings: notify: 22.0
//! ```

use std::fmt::Debug;

use log::debug;

use crate::delegate::{Delegate, Key, SyncDelegate};

/// Attachable debug logger for delegate notifications.
///
/// Registers an ordinary keyed entry that logs each argument value at
/// `debug` level under the configured target. The containers themselves
/// never log; detach the tap like any other entry, via its key.
pub struct LogTap {
    target: &'static str,
}

impl LogTap {
    /// Creates a tap logging under the given target.
    #[must_use]
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    /// Registers the tap into a single-threaded delegate under `key`.
    ///
    /// ## Example
    /// ```
    /// use fanout::{Delegate, Key, LogTap};
    ///
    /// let mut delegate = Delegate::new();
    /// LogTap::new("app::readings").attach(&mut delegate, Key::from_raw(1));
    ///
    /// delegate.notify_all(&21.5f64);
    /// assert_eq!(delegate.remove(Key::from_raw(1)), 1);
    /// ```
    pub fn attach<A>(self, delegate: &mut Delegate<A>, key: Key)
    where
        A: Debug + 'static,
    {
        let target = self.target;
        delegate.register_keyed(key, move |args: &A| {
            debug!(target: target, "notify: {args:?}");
        });
    }

    /// Registers the tap into a thread-safe delegate under `key`.
    pub fn attach_sync<A>(self, delegate: &SyncDelegate<A>, key: Key)
    where
        A: Debug + 'static,
    {
        let target = self.target;
        delegate.register_keyed(key, move |args: &A| {
            debug!(target: target, "notify: {args:?}");
        });
    }
}

impl Default for LogTap {
    /// Logs under the crate name.
    fn default() -> Self {
        Self::new("fanout")
    }
}
