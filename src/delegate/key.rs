//! # Opaque identity keys for delegate entries.
//!
//! A [`Key`] is the address-sized token a registration stores so the entry
//! can be found again by [`remove`](crate::Delegate::remove). The container
//! imposes no structure on keys: they are compared bit-for-bit, they are
//! never dereferenced, and nothing stops two entries from sharing one key
//! (removal deletes every match).
//!
//! ## Conventions
//! - Bound registrations use the target instance's address ([`Key::of`]).
//! - Free registrations default to [`Key::NONE`] and may supply any token
//!   the caller can reproduce later, such as a function address or the
//!   address of a long-lived object ([`Key::of_ref`]).

use std::sync::Arc;

/// Opaque identity token attached to a delegate entry.
///
/// Carries no ownership and is never dereferenced; it only has to match
/// (`==`) at removal time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Key(usize);

impl Key {
    /// The null token. Entries registered without an explicit key use this.
    pub const NONE: Key = Key(0);

    /// Wraps an arbitrary caller-chosen token.
    ///
    /// ## Example
    /// ```
    /// use fanout::Key;
    ///
    /// fn on_tick(_: &u64) {}
    ///
    /// // A function address makes a convenient removal token.
    /// let key = Key::from_raw(on_tick as fn(&u64) as usize);
    /// assert!(!key.is_none());
    /// ```
    #[must_use]
    pub fn from_raw(raw: usize) -> Self {
        Key(raw)
    }

    /// Keys an entry by the address of an `Arc` target.
    ///
    /// This is the key [`register_bound`](crate::Delegate::register_bound)
    /// stores, so `remove(Key::of(&target))` detaches every entry bound to
    /// that instance.
    #[must_use]
    pub fn of<T: ?Sized>(target: &Arc<T>) -> Self {
        Key(Arc::as_ptr(target).cast::<()>() as usize)
    }

    /// Keys an entry by the address of any reference.
    ///
    /// The referent is not borrowed beyond this call; only its address is
    /// kept. Prefer addresses of long-lived objects — a reused allocation
    /// reuses the key.
    #[must_use]
    pub fn of_ref<T: ?Sized>(target: &T) -> Self {
        Key((target as *const T).cast::<()>() as usize)
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_raw(self) -> usize {
        self.0
    }

    /// Returns `true` for the null token.
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Key::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_default_and_none() {
        assert_eq!(Key::default(), Key::NONE);
        assert!(Key::NONE.is_none());
        assert_eq!(Key::NONE.as_raw(), 0);
    }

    #[test]
    fn test_from_raw_roundtrip() {
        let key = Key::from_raw(0xDEAD);
        assert_eq!(key.as_raw(), 0xDEAD);
        assert!(!key.is_none());
    }

    #[test]
    fn test_of_distinguishes_instances() {
        let a = Arc::new(7u32);
        let b = Arc::new(7u32);
        assert_eq!(Key::of(&a), Key::of(&a));
        assert_ne!(Key::of(&a), Key::of(&b), "distinct allocations, distinct keys");
    }

    #[test]
    fn test_of_matches_clone_of_same_arc() {
        let a = Arc::new(String::from("shared"));
        let also_a = Arc::clone(&a);
        assert_eq!(Key::of(&a), Key::of(&also_a));
    }
}
