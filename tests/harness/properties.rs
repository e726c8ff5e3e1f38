//! Properties that hold for any generated workload replayed by the oracle.

use std::collections::HashSet;

use crate::common::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn oracle_emits_one_line_per_operation(count in 0usize..300, seed: u64) {
        let workload = seeded_workload(count, seed);
        let output = run_oracle(&workload.encode().unwrap()).unwrap();
        prop_assert_eq!(output.lines().count(), count + 1);
        let header = count.to_string();
        prop_assert_eq!(output.lines().next(), Some(header.as_str()));
    }

    #[test]
    fn replay_is_a_pure_function(count in 0usize..300, seed: u64) {
        let ops = seeded_workload(count, seed).operations;
        prop_assert_eq!(replay(&ops), replay(&ops));
    }

    #[test]
    fn not_found_only_after_delete(count in 0usize..300, seed: u64) {
        // Generated keys are always written first, so a read or delete can
        // only miss once a delete has removed the key.
        let ops = seeded_workload(count, seed).operations;
        let results = replay(&ops);
        let mut deleted: HashSet<&str> = HashSet::new();
        for (op, result) in ops.iter().zip(&results) {
            if *result == OpResult::NotFound {
                prop_assert!(deleted.contains(op.key()));
            }
            if let Operation::Delete { key } = op {
                deleted.insert(key.as_str());
            }
        }
    }

    #[test]
    fn write_then_read_returns_value(key in "[A-Za-z0-9]{1,12}", value in "[A-Za-z0-9]{1,12}") {
        let ops = vec![Operation::write(&key, &value), Operation::read(&key)];
        prop_assert_eq!(
            replay(&ops),
            vec![OpResult::Success, OpResult::Value(value.clone())]
        );
    }

    #[test]
    fn delete_then_read_misses(key in "[A-Za-z0-9]{1,12}", value in "[A-Za-z0-9]{1,12}") {
        let ops = vec![
            Operation::write(&key, &value),
            Operation::delete(&key),
            Operation::delete(&key),
            Operation::read(&key),
        ];
        prop_assert_eq!(
            replay(&ops),
            vec![
                OpResult::Success,
                OpResult::Success,
                OpResult::NotFound,
                OpResult::NotFound,
            ]
        );
    }
}
