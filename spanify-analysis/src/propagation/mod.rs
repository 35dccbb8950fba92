//! Size-info availability propagation over buffer dependency chains.

mod availability;

pub use availability::{propagate, PropagationSummary};
