//! Collection aliases. All hot-path maps key on short strings or graph
//! indices, where FxHash beats SipHash by a wide margin.

pub use rustc_hash::{FxHashMap, FxHashSet};
