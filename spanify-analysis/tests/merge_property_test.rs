//! Property tests for registry merge semantics.

use proptest::prelude::*;

use spanify_analysis::{Node, NodeKind, NodeRegistry, SizeInfo};

fn observation(key: &str, is_buffer: bool, size_available: bool) -> Node {
    Node {
        is_buffer,
        replacement: key.to_string(),
        size_info: if size_available {
            SizeInfo::Available
        } else {
            SizeInfo::Unknown
        },
        kind: NodeKind::Plain {
            include: format!("inc-{key}"),
        },
    }
}

proptest! {
    // Once any observation classifies the location as a buffer, the
    // merged node stays a buffer regardless of observation order.
    #[test]
    fn buffer_flag_is_order_independent(flags in proptest::collection::vec(any::<bool>(), 1..24)) {
        let mut registry = NodeRegistry::new();
        for &flag in &flags {
            registry.register(observation("key", flag, false));
        }
        let merged = registry.get("key").unwrap();
        prop_assert_eq!(merged.is_buffer, flags.iter().any(|&f| f));
    }

    // Registering the same observation repeatedly is idempotent.
    #[test]
    fn repeated_registration_is_idempotent(n in 1usize..16, is_buffer in any::<bool>(), sized in any::<bool>()) {
        let mut registry = NodeRegistry::new();
        registry.register(observation("key", is_buffer, sized));
        let once = registry.get("key").cloned().unwrap();

        for _ in 1..n {
            registry.register(observation("key", is_buffer, sized));
        }
        prop_assert_eq!(registry.len(), 1);
        prop_assert_eq!(registry.get("key"), Some(&once));
    }

    // Non-buffer attributes always reflect the newest observation.
    #[test]
    fn latest_observation_wins_for_size_info(sizes in proptest::collection::vec(any::<bool>(), 1..24)) {
        let mut registry = NodeRegistry::new();
        for &sized in &sizes {
            registry.register(observation("key", false, sized));
        }
        let expected = if *sizes.last().unwrap() {
            SizeInfo::Available
        } else {
            SizeInfo::Unknown
        };
        prop_assert_eq!(registry.get("key").unwrap().size_info, expected);
    }
}
