//! # fanout
//!
//! **Fanout** is a small multicast-delegate library for Rust.
//!
//! It provides ordered registries of callbacks sharing one argument
//! signature: publishers notify every registered callable in one call
//! without depending on any subscriber's concrete type. The crate is a
//! building block for observer and event-notification patterns; it is not
//! an event bus (no topics, no priorities, no async dispatch).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌────────────┐  ┌────────────┐  ┌────────────┐
//!   │ subscriber │  │ subscriber │  │  free fn / │
//!   │  (Arc<T>)  │  │  (Arc<U>)  │  │  closure   │
//!   └─────┬──────┘  └─────┬──────┘  └─────┬──────┘
//!         │ register_bound│               │ register / register_keyed
//!         ▼               ▼               ▼
//! ┌─────────────────────────────────────────────────┐
//! │  Delegate<A>                                    │
//! │  [ entry 0 | entry 1 | ... | entry N-1 ]        │
//! │  insertion order = invocation order             │
//! └───────────────────────┬─────────────────────────┘
//!                         │ notify_all(&args)
//!                         ▼
//!        entry 0 ─► entry 1 ─► ... ─► entry N-1
//!
//! SyncDelegate<A> = Mutex<Delegate<A>>; every operation, including the
//! whole notification pass, runs under the lock.
//! ```
//!
//! ### Entries and keys
//! Each registration appends one entry: a boxed, type-erased invoker plus
//! an opaque [`Key`] used later for removal. Bound registrations key the
//! entry by the instance address and hold the target weakly (the delegate
//! never keeps a subscriber alive); free registrations take any
//! caller-chosen token, defaulting to [`Key::NONE`]. Removal deletes every
//! entry matching the key and preserves the order of the rest.
//!
//! ## Features
//! | Area            | Description                                             | Key types            |
//! |-----------------|---------------------------------------------------------|----------------------|
//! | **Registration**| Bound methods, free functions, closures; bind-time type checking. | [`Delegate`]  |
//! | **Notification**| Ordered synchronous pass over all entries.              | [`Delegate`]         |
//! | **Removal**     | By opaque identity key; removes every match.            | [`Key`]              |
//! | **Concurrency** | Same contract serialized behind one lock.               | [`SyncDelegate`]     |
//! | **Errors**      | Contention reported by the non-blocking variants.       | [`DelegateError`]    |
//!
//! ## Optional features
//! - `logging`: exports [`LogTap`], a `log`-facade tap registrable like
//!   any other callback _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicI64, Ordering};
//! use std::sync::Arc;
//!
//! use fanout::{Delegate, Key};
//!
//! struct Sink {
//!     total: AtomicI64,
//! }
//!
//! impl Sink {
//!     fn on_sample(&self, value: &i64) {
//!         self.total.fetch_add(*value, Ordering::Relaxed);
//!     }
//! }
//!
//! let sink = Arc::new(Sink { total: AtomicI64::new(0) });
//! let mut samples = Delegate::new();
//!
//! // A bound method and a free closure share one notification pass.
//! samples.register_bound(&sink, Sink::on_sample);
//! samples.register(|value: &i64| println!("sample: {value}"));
//!
//! samples.notify_all(&3);
//! samples.notify_all(&4);
//! assert_eq!(sink.total.load(Ordering::Relaxed), 7);
//!
//! // Detach everything bound to the sink; the closure keeps firing.
//! assert_eq!(samples.remove(Key::of(&sink)), 1);
//! samples.notify_all(&100);
//! assert_eq!(sink.total.load(Ordering::Relaxed), 7);
//! ```

mod delegate;
mod error;

// ---- Public re-exports ----

pub use delegate::{Delegate, Key, SyncDelegate};
pub use error::DelegateError;

// Optional: expose the log-facade tap.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod taps;
#[cfg(feature = "logging")]
pub use taps::LogTap;
