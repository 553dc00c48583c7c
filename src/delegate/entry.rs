//! Storage for one registered callback: a type-erased invoker plus the
//! identity key removal matches on.

use crate::delegate::key::Key;

/// One registered callback.
///
/// The invoker owns whatever context the registration captured (a `Weak`
/// target for bound entries, closure state for free ones); it is fixed at
/// registration time and never re-dispatches to a different callable.
/// `Send` because the same storage backs [`SyncDelegate`](crate::SyncDelegate).
pub(crate) struct Entry<A> {
    invoke: Box<dyn Fn(&A) + Send>,
    key: Key,
}

impl<A> Entry<A> {
    pub(crate) fn new<F>(key: Key, invoke: F) -> Self
    where
        F: Fn(&A) + Send + 'static,
    {
        Self {
            invoke: Box::new(invoke),
            key,
        }
    }

    pub(crate) fn fire(&self, args: &A) {
        (self.invoke)(args);
    }

    pub(crate) fn key(&self) -> Key {
        self.key
    }
}
