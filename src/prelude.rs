//! Prelude module - common imports for carrier
//!
//! Import this module to get the holders and their extension traits:
//! ```rust
//! use carrier::prelude::*;
//! ```

pub use carrier_core::{Optional, Outcome, OutcomeExt};

pub use carrier_core::contract::{ensure, violated};
pub use carrier_core::{Violation, ViolationPolicy};
