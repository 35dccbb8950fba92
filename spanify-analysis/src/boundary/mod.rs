//! Seam adaptation between rewritten and non-rewritten code.

mod adapter;

pub use adapter::{adapt, BoundarySummary};
