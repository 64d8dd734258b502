//! Hash collections used throughout the engine.
//!
//! FxHash is faster than SipHash for the short string keys the engine works
//! with; none of the inputs are attacker-controlled.

pub use rustc_hash::{FxHashMap, FxHashSet};
