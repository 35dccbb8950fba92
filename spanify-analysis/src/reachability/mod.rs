//! Edit collection: DFS from every buffer root with available size info.

mod change_set;
mod collector;

pub use change_set::ChangeSet;
pub use collector::{collect, CollectResult};
