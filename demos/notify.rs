//! # Demo: notify
//!
//! Registers a bound method and a keyed free function on one delegate,
//! notifies twice, detaches the free entry by its key, then notifies
//! again.
//!
//! ## Flow
//! ```text
//! register_bound(sensor, Thermometer::on_reading)   key = sensor address
//! register_keyed(audit_key, log_reading)            key = fn address
//! notify_all(&21.5) ──► sensor, audit
//! notify_all(&22.0) ──► sensor, audit
//! remove(audit_key)
//! notify_all(&22.5) ──► sensor only
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example notify
//! ```

use std::sync::Arc;

use fanout::{Delegate, Key};

struct Thermometer {
    label: &'static str,
}

impl Thermometer {
    fn on_reading(&self, celsius: &f64) {
        println!("[{}] reading: {celsius:.1}C", self.label);
    }
}

fn log_reading(celsius: &f64) {
    println!("[audit] reading: {celsius:.1}C");
}

fn main() {
    let sensor = Arc::new(Thermometer { label: "boiler" });
    let mut readings = Delegate::new();

    readings.register_bound(&sensor, Thermometer::on_reading);
    let audit_key = Key::from_raw(log_reading as fn(&f64) as usize);
    readings.register_keyed(audit_key, log_reading);

    readings.notify_all(&21.5);
    readings.notify_all(&22.0);

    println!("[audit] detached ({} entry)", readings.remove(audit_key));
    readings.notify_all(&22.5);
}
