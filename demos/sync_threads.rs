//! # Demo: sync_threads
//!
//! Shares one [`SyncDelegate`] between publisher threads and a churn
//! thread that keeps registering and removing a keyed tap. Every
//! operation serializes on the delegate's lock, so the permanent sink
//! sees exactly one delivery per `notify_all`.
//!
//! ## Run
//! ```bash
//! cargo run --example sync_threads
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use fanout::{Key, SyncDelegate};

fn main() {
    let delegate = Arc::new(SyncDelegate::new());
    let delivered = Arc::new(AtomicUsize::new(0));

    {
        let delivered = Arc::clone(&delivered);
        delegate.register(move |seq: &usize| {
            delivered.fetch_add(1, Ordering::Relaxed);
            println!("[sink] seq={seq}");
        });
    }

    let publishers: Vec<_> = (0..3usize)
        .map(|p| {
            let delegate = Arc::clone(&delegate);
            thread::spawn(move || {
                for seq in 0..5usize {
                    delegate.notify_all(&(p * 100 + seq));
                }
            })
        })
        .collect();

    let churn = {
        let delegate = Arc::clone(&delegate);
        thread::spawn(move || {
            let key = Key::from_raw(0xC0FFEE);
            for _ in 0..10 {
                delegate.register_keyed(key, |seq: &usize| println!("[tap] seq={seq}"));
                delegate.remove(key);
            }
        })
    };

    for publisher in publishers {
        publisher.join().unwrap();
    }
    churn.join().unwrap();

    println!("delivered {} notifications", delivered.load(Ordering::Relaxed));
}
