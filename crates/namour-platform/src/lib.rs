//! Platform service abstractions.
//!
//! Commands that need something from the host (today only the wall clock)
//! reach it through a trait object, so tests can swap in a fixed clock.

mod services;

pub use services::{SystemClock, SystemTime, TimeService, Weekday};
