//! Movable-holiday date computation across four traditions.
//!
//! This crate provides:
//! - Western/Orthodox Christian feasts via arithmetic computus
//! - Islamic (Hijri) month starts via a crescent-visibility proxy
//! - Hindu luni-solar festivals via a tithi rule engine
//! - Chinese lunisolar months via principal-term bracketing
//!
//! Every public entry point is a deterministic pure function of
//! (tradition, year, observer location, policy thresholds). There is no
//! I/O, no logging, and no process-wide state; the only mutability is a
//! per-instance memoization cache on [`CalendarEngine`].

pub mod chinese;
pub mod christian;
pub mod date;
pub mod engine;
pub mod error;
pub mod hindu;
pub mod islamic;
pub mod location;

pub use date::CivilDate;
pub use engine::{CalendarEngine, MAX_YEAR, MIN_YEAR, Tradition};
pub use error::HolidayError;
pub use location::{CrescentPolicy, Location};
