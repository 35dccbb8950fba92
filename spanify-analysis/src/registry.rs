//! Node registry — one per run, keyed on the canonical replacement text.
//!
//! The same program location is observed once per translation unit that
//! touches it, so re-registration is the common case, not the exception.
//! Merge rule: `is_buffer` is OR-combined (once a location is classified
//! as a buffer that never reverts); every other attribute takes the
//! newest observation.

use spanify_core::types::collections::FxHashMap;

use crate::record::{Node, SizeInfo};

#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: FxHashMap<String, Node>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or merge a node observation.
    pub fn register(&mut self, mut node: Node) {
        if let Some(existing) = self.nodes.get(node.key()) {
            node.is_buffer = node.is_buffer || existing.is_buffer;
        }
        self.nodes.insert(node.key().to_string(), node);
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Overwrite the cached availability for a key. No-op for unknown
    /// keys; graph nodes always have a registry entry by construction.
    pub fn set_size_info(&mut self, key: &str, size_info: SizeInfo) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.size_info = size_info;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NodeKind;

    fn node(key: &str, is_buffer: bool, size_info: SizeInfo) -> Node {
        Node {
            is_buffer,
            replacement: key.to_string(),
            size_info,
            kind: NodeKind::Plain {
                include: format!("include-for-{key}"),
            },
        }
    }

    #[test]
    fn registering_twice_with_identical_fields_is_idempotent() {
        let mut registry = NodeRegistry::new();
        registry.register(node("buf", true, SizeInfo::Available));
        let once = registry.get("buf").cloned().unwrap();

        registry.register(node("buf", true, SizeInfo::Available));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("buf"), Some(&once));
    }

    #[test]
    fn buffer_classification_is_monotonic() {
        let mut registry = NodeRegistry::new();
        registry.register(node("buf", true, SizeInfo::Unknown));
        registry.register(node("buf", false, SizeInfo::Unknown));
        assert!(registry.get("buf").unwrap().is_buffer);

        let mut registry = NodeRegistry::new();
        registry.register(node("buf", false, SizeInfo::Unknown));
        registry.register(node("buf", true, SizeInfo::Unknown));
        assert!(registry.get("buf").unwrap().is_buffer);
    }

    #[test]
    fn latest_observation_wins_for_other_attributes() {
        let mut registry = NodeRegistry::new();
        registry.register(node("buf", false, SizeInfo::Available));
        registry.register(node("buf", false, SizeInfo::Unknown));
        assert_eq!(registry.get("buf").unwrap().size_info, SizeInfo::Unknown);
    }

    #[test]
    fn set_size_info_updates_existing_entry() {
        let mut registry = NodeRegistry::new();
        registry.register(node("buf", true, SizeInfo::Unknown));
        registry.set_size_info("buf", SizeInfo::Unavailable);
        assert_eq!(
            registry.get("buf").unwrap().size_info,
            SizeInfo::Unavailable
        );
    }
}
