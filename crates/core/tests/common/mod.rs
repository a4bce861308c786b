//! Shared helpers for carrier-core integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness, once per binary.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Construction and drop counts shared by a family of [`Tracked`] payloads.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, label: &'static str) -> Tracked {
        self.created.set(self.created.get().saturating_add(1));
        Tracked {
            label,
            ledger: self.clone(),
        }
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    pub fn live(&self) -> usize {
        self.created().saturating_sub(self.dropped())
    }
}

/// Payload that records its own construction and destruction.
#[derive(Debug)]
pub struct Tracked {
    pub label: &'static str,
    ledger: Ledger,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.ledger.track(self.label)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger
            .dropped
            .set(self.ledger.dropped.get().saturating_add(1));
    }
}
