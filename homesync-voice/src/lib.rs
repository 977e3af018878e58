//! Pure matching logic for the voice command and search features.
//!
//! Both entry points are total, synchronous functions over a device
//! snapshot supplied by the caller. They hold no state between calls and
//! perform no I/O, so they are safe to invoke from any task with whatever
//! snapshot the caller currently has, stale or not.

mod interpreter;
mod normalize;
mod search;

pub use interpreter::{VoiceIntent, interpret, parse_intent};
pub use normalize::normalize_name;
pub use search::filter_devices;
