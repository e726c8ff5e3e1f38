//! Property tests for generated workloads.

use std::collections::HashSet;

use kvharness_core::{decode_stream, Operation};
use kvharness_workload::{generate, seeding_count, WorkloadConfig, WorkloadGenerator};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_emits_exactly_n_operations(count in 0usize..400, seed: u64) {
        let config = WorkloadConfig::new(count).with_seed(seed);
        let workload = generate(&config).unwrap();
        prop_assert_eq!(workload.operations.len(), count);
        prop_assert_eq!(workload.stats.total(), count);
    }

    #[test]
    fn prop_keys_come_from_earlier_writes(count in 0usize..400, seed: u64) {
        let config = WorkloadConfig::new(count).with_seed(seed);
        let mut written: HashSet<String> = HashSet::new();
        for op in WorkloadGenerator::new(&config).unwrap() {
            match op {
                Operation::Write { key, .. } => {
                    written.insert(key);
                }
                Operation::Read { key } | Operation::Delete { key } => {
                    prop_assert!(written.contains(&key));
                }
            }
        }
    }

    #[test]
    fn prop_seeding_prefix_is_writes(count in 0usize..400, seed: u64) {
        let config = WorkloadConfig::new(count).with_seed(seed);
        let ops: Vec<_> = WorkloadGenerator::new(&config).unwrap().collect();
        for op in &ops[..seeding_count(count)] {
            let is_write = matches!(op, Operation::Write { .. });
            prop_assert!(is_write);
        }
    }

    #[test]
    fn prop_tokens_have_configured_length(len in 1usize..24, seed: u64) {
        let config = WorkloadConfig::new(60).with_key_value_length(len).with_seed(seed);
        for op in generate(&config).unwrap().operations {
            prop_assert_eq!(op.key().len(), len);
            if let Operation::Write { value, .. } = &op {
                prop_assert_eq!(value.len(), len);
            }
        }
    }

    #[test]
    fn prop_encoded_stream_decodes_to_same_operations(count in 0usize..200, seed: u64) {
        let workload = generate(&WorkloadConfig::new(count).with_seed(seed)).unwrap();
        let decoded = decode_stream(&workload.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, workload.operations);
    }
}
