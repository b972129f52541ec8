//! Binary switch remembering its most recent transition.
//!
//! The switch is meant to sit in a host polling loop. Once per cycle the
//! loop feeds it the observed on/off value, then asks whether that cycle
//! flipped the state:
//!
//! ```
//! use flick::Switch;
//!
//! let mut button = Switch::default();
//!
//! for &observed in &[false, false, true, true, false, false] {
//!     button.set(observed);
//!
//!     if button.take_turned_on() {
//!         // React to the press, once.
//!     }
//!     if button.take_turned_off() {
//!         // React to the release, once.
//!     }
//! }
//! ```
//!
//! Reads come in two flavors. The `just_*` accessors peek at the pending
//! transition and leave it in place. The `take_*` accessors clear it, so
//! a loop that should react to a transition exactly once reaches for
//! those.

pub mod switch;

pub use switch::Switch;
