//! Derived display state for an `InstantLendingPool` position.
//!
//! Everything in this crate is a pure function of the latest chain snapshot
//! and the user's local input. No network access happens here; the chain
//! reads and transaction submission live in `lending-client`.

mod amount;
mod config;
mod dashboard;
mod health;
mod position;
mod submit;

pub use {amount::*, config::*, dashboard::*, health::*, position::*, submit::*};
