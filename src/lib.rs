#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! # Carrier
//!
//! Success-or-error and zero-or-one value holders with fatal contract checks.
//!
//! This library re-exports the carrier workspace crates for convenience.
//!
//! ```
//! use carrier::prelude::*;
//!
//! fn lookup(key: &str) -> Outcome<u32, String> {
//!     match key {
//!         "answer" => Outcome::success(42),
//!         other => Outcome::failure(format!("{other} not found")),
//!     }
//! }
//!
//! let found = lookup("answer");
//! assert!(found.is_success());
//! assert_eq!(found.value(), 42);
//!
//! let missing = lookup("question");
//! assert_eq!(missing.error(), "question not found");
//! ```

pub use carrier_core;

pub mod prelude;
