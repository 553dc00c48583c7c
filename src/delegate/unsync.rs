//! # Single-threaded multicast delegate.
//!
//! [`Delegate`] owns an ordered list of callbacks sharing one argument
//! type and invokes them as a group. It is the core container;
//! [`SyncDelegate`](crate::SyncDelegate) wraps it for concurrent callers.
//!
//! ## Architecture
//! ```text
//! register / register_keyed / register_bound
//!     │  append
//!     ▼
//! [ entry 0 | entry 1 | ... | entry N-1 ]   insertion order = invocation order
//!     │                                │
//!     └── notify_all(&args) ───────────┘    fires each invoker in sequence
//!
//! remove(key)  ──► retains every entry whose key differs (order preserved)
//! ```
//!
//! ## Rules
//! - **Ordering**: `notify_all` fires entries in registration order.
//! - **Keys**: removal deletes *every* entry matching the key; keys are
//!   not unique and [`Key::NONE`] is an ordinary value.
//! - **Ownership**: bound entries hold a `Weak` reference: the delegate
//!   never keeps a target alive, and a pass silently skips entries whose
//!   target has been dropped.
//! - **Failures**: a panicking callback unwinds through `notify_all`; the
//!   remaining entries of that pass do not run and nothing is rolled back.
//! - **Exclusion**: registration needs `&mut self` while a pass borrows
//!   `&self`, so re-entrant mutation during a pass does not compile. The
//!   type is `Send` but not `Sync`; cross-thread sharing goes through
//!   [`SyncDelegate`](crate::SyncDelegate).

use std::sync::{Arc, Weak};

use crate::delegate::entry::Entry;
use crate::delegate::key::Key;

/// Ordered multicast callback container.
///
/// All registered callbacks share the argument type `A`; multi-argument
/// signatures are expressed as tuples (`Delegate<(u32, String)>`).
///
/// ## Example
/// ```
/// use fanout::Delegate;
///
/// let mut on_change = Delegate::new();
/// on_change.register(|name: &String| println!("changed: {name}"));
/// on_change.notify_all(&"volume".to_string());
/// ```
pub struct Delegate<A> {
    entries: Vec<Entry<A>>,
}

impl<A> Delegate<A> {
    /// Creates an empty delegate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty delegate with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Registers a free callback with no removal key.
    ///
    /// The entry is keyed [`Key::NONE`]; `remove(Key::NONE)` deletes every
    /// entry registered this way. Shorthand for
    /// [`register_keyed`](Self::register_keyed) with the null token.
    pub fn register<F>(&mut self, callback: F)
    where
        F: Fn(&A) + Send + 'static,
    {
        self.register_keyed(Key::NONE, callback);
    }

    /// Registers a free callback under a caller-chosen removal key.
    ///
    /// The callable is fixed here once; a signature that does not take
    /// `&A` is rejected at compile time. The key is an opaque token that
    /// the caller reproduces for [`remove`](Self::remove), a function
    /// address being the usual choice.
    ///
    /// ## Example
    /// ```
    /// use fanout::{Delegate, Key};
    ///
    /// fn audit(value: &i64) {
    ///     println!("audit: {value}");
    /// }
    ///
    /// let mut delegate = Delegate::new();
    /// let key = Key::from_raw(audit as fn(&i64) as usize);
    /// delegate.register_keyed(key, audit);
    ///
    /// delegate.notify_all(&42);
    /// assert_eq!(delegate.remove(key), 1);
    /// ```
    pub fn register_keyed<F>(&mut self, key: Key, callback: F)
    where
        F: Fn(&A) + Send + 'static,
    {
        self.entries.push(Entry::new(key, callback));
    }

    /// Registers a method of an `Arc`-held instance.
    ///
    /// `method` is chosen at the call site (typically a method path such
    /// as `Widget::on_event`) and fixed for the lifetime of the entry;
    /// the entry is keyed by the instance address ([`Key::of`]), so every
    /// binding to the same instance can be detached with one `remove`.
    ///
    /// The delegate holds the target as a `Weak` reference: it does not
    /// extend the instance's lifetime, and once the last `Arc` is dropped
    /// the entry is skipped by subsequent passes (it still occupies a
    /// slot until removed).
    ///
    /// ## Example
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicU32, Ordering};
    /// use fanout::{Delegate, Key};
    ///
    /// #[derive(Default)]
    /// struct Gauge {
    ///     last: AtomicU32,
    /// }
    ///
    /// impl Gauge {
    ///     fn on_sample(&self, sample: &u32) {
    ///         self.last.store(*sample, Ordering::Relaxed);
    ///     }
    /// }
    ///
    /// let gauge = Arc::new(Gauge::default());
    /// let mut delegate = Delegate::new();
    /// delegate.register_bound(&gauge, Gauge::on_sample);
    ///
    /// delegate.notify_all(&88);
    /// assert_eq!(gauge.last.load(Ordering::Relaxed), 88);
    ///
    /// assert_eq!(delegate.remove(Key::of(&gauge)), 1);
    /// ```
    pub fn register_bound<T, F>(&mut self, target: &Arc<T>, method: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&T, &A) + Send + 'static,
    {
        let key = Key::of(target);
        let target: Weak<T> = Arc::downgrade(target);
        self.entries.push(Entry::new(key, move |args: &A| {
            if let Some(target) = target.upgrade() {
                method(&*target, args);
            }
        }));
    }

    /// Invokes every entry in registration order with the same arguments.
    ///
    /// The entry list itself is never mutated by a pass. A no-op on an
    /// empty delegate.
    ///
    /// ### Notes
    /// - A panic inside a callback propagates to the caller; the entries
    ///   after it are skipped for this pass and nothing is rolled back.
    /// - Bound entries whose target has been dropped are skipped.
    pub fn notify_all(&self, args: &A) {
        for entry in &self.entries {
            entry.fire(args);
        }
    }

    /// Removes every entry whose key equals `key`, in one pass.
    ///
    /// Returns how many entries were removed; `0` (not an error) when
    /// nothing matched. Surviving entries keep their relative order.
    pub fn remove(&mut self, key: Key) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key() != key);
        before - self.entries.len()
    }

    /// Number of registered entries, including bound entries whose target
    /// has already been dropped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<A> Default for Delegate<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter {
        hits: AtomicUsize,
    }

    impl Counter {
        fn bump(&self, _args: &u8) {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        fn total(&self) -> usize {
            self.hits.load(Ordering::Relaxed)
        }
    }

    #[test]
    fn test_notify_runs_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut delegate = Delegate::new();
        for tag in ["first", "second", "third"] {
            let log = Arc::clone(&log);
            delegate.register(move |_: &u8| log.lock().push(tag));
        }

        delegate.notify_all(&0);
        assert_eq!(*log.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_notify_forwards_the_same_args_to_every_entry() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut delegate = Delegate::new();
        for _ in 0..3 {
            let seen = Arc::clone(&seen);
            delegate.register(move |args: &(u32, &'static str)| seen.lock().push(*args));
        }

        delegate.notify_all(&(7, "ping"));
        assert_eq!(*seen.lock(), vec![(7, "ping"); 3]);
    }

    #[test]
    fn test_notify_on_empty_delegate_is_noop() {
        let delegate = Delegate::<u32>::new();
        delegate.notify_all(&5);
        assert!(delegate.is_empty());
    }

    #[test]
    fn test_remove_deletes_all_matching_and_preserves_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut delegate = Delegate::new();
        for (tag, raw) in [("a", 1), ("b", 2), ("a2", 1), ("c", 3)] {
            let log = Arc::clone(&log);
            delegate.register_keyed(Key::from_raw(raw), move |_: &u8| log.lock().push(tag));
        }

        assert_eq!(delegate.remove(Key::from_raw(1)), 2);
        assert_eq!(delegate.len(), 2);

        delegate.notify_all(&0);
        assert_eq!(*log.lock(), vec!["b", "c"], "survivors keep relative order");
    }

    #[test]
    fn test_remove_without_match_is_idempotent_noop() {
        let mut delegate = Delegate::new();
        delegate.register_keyed(Key::from_raw(1), |_: &u8| {});

        assert_eq!(delegate.remove(Key::from_raw(99)), 0);
        assert_eq!(delegate.remove(Key::from_raw(99)), 0, "second call is still a no-op");
        assert_eq!(delegate.len(), 1);
    }

    #[test]
    fn test_remove_none_key_deletes_unkeyed_entries() {
        let mut delegate = Delegate::new();
        delegate.register(|_: &u8| {});
        delegate.register(|_: &u8| {});
        delegate.register_keyed(Key::from_raw(4), |_: &u8| {});

        assert_eq!(delegate.remove(Key::NONE), 2);
        assert_eq!(delegate.len(), 1);
    }

    #[test]
    fn test_bound_instance_registered_twice_fires_twice_and_removes_together() {
        let counter = Arc::new(Counter::default());
        let mut delegate = Delegate::new();
        delegate.register_bound(&counter, Counter::bump);
        delegate.register_bound(&counter, Counter::bump);

        delegate.notify_all(&1);
        assert_eq!(counter.total(), 2);

        assert_eq!(delegate.remove(Key::of(&counter)), 2);
        delegate.notify_all(&1);
        assert_eq!(counter.total(), 2, "no entries left for this instance");
    }

    #[test]
    fn test_two_instances_share_the_method_but_not_the_key() {
        let left = Arc::new(Counter::default());
        let right = Arc::new(Counter::default());
        let mut delegate = Delegate::new();
        delegate.register_bound(&left, Counter::bump);
        delegate.register_bound(&right, Counter::bump);

        assert_eq!(delegate.remove(Key::of(&left)), 1);
        delegate.notify_all(&1);
        assert_eq!(left.total(), 0);
        assert_eq!(right.total(), 1);
    }

    #[test]
    fn test_dropped_bound_target_is_skipped_and_pass_continues() {
        let counter = Arc::new(Counter::default());
        let survivor = Arc::new(Counter::default());
        let mut delegate = Delegate::new();
        delegate.register_bound(&counter, Counter::bump);
        delegate.register_bound(&survivor, Counter::bump);

        drop(counter);
        delegate.notify_all(&1);

        assert_eq!(survivor.total(), 1, "later entries still fire");
        assert_eq!(delegate.len(), 2, "the stale entry stays until removed");
    }

    #[test]
    fn test_clear_resets_the_sequence() {
        let mut delegate = Delegate::new();
        delegate.register(|_: &u8| {});
        delegate.register_keyed(Key::from_raw(2), |_: &u8| {});
        assert_eq!(delegate.len(), 2);

        delegate.clear();
        assert!(delegate.is_empty());
        delegate.notify_all(&0);
    }

    static PRINT_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn print(_value: &i32) {
        PRINT_CALLS.fetch_add(1, Ordering::Relaxed);
    }

    struct Listener {
        seen: Mutex<Vec<i32>>,
    }

    impl Listener {
        fn on_event(&self, value: &i32) {
            self.seen.lock().push(*value);
        }
    }

    #[test]
    fn test_bound_plus_keyed_free_scenario() {
        let listener = Arc::new(Listener {
            seen: Mutex::new(Vec::new()),
        });
        let mut delegate = Delegate::new();
        delegate.register_bound(&listener, Listener::on_event);

        let print_key = Key::from_raw(print as fn(&i32) as usize);
        delegate.register_keyed(print_key, print);

        delegate.notify_all(&42);
        assert_eq!(*listener.seen.lock(), vec![42]);
        assert_eq!(PRINT_CALLS.load(Ordering::Relaxed), 1);

        assert_eq!(delegate.remove(print_key), 1);
        delegate.notify_all(&7);
        assert_eq!(*listener.seen.lock(), vec![42, 7]);
        assert_eq!(PRINT_CALLS.load(Ordering::Relaxed), 1, "free entry no longer fires");
    }
}
