//! Generate → implementation under test → score, as an external runner does.

use crate::common::*;

#[test]
fn correct_store_passes() {
    let workload = seeded_workload(5000, 2024);
    let actual = StoreUnderTest::default().run_stream(&workload.operations);
    let verdict = verify(&replay(&workload.operations), &decode_results(&actual).unwrap());
    assert!(verdict.passed(), "{}", verdict);
    assert_eq!(verdict.matched, 5000);
}

#[test]
fn store_that_ignores_deletes_fails() {
    let workload = seeded_workload(5000, 2024);
    let actual = StoreUnderTest::buggy().run_stream(&workload.operations);
    let verdict = verify(&replay(&workload.operations), &decode_results(&actual).unwrap());
    assert!(!verdict.passed());
    assert!(verdict.mismatch_count > 0);

    let first = &verdict.mismatches[0];
    let earlier_delete = workload.operations[..first.index]
        .iter()
        .any(|op| matches!(op, Operation::Delete { key } if key == workload.operations[first.index].key()));
    assert!(earlier_delete, "mismatch at {} not caused by a delete", first.index);
}

#[test]
fn truncated_output_fails_on_count() {
    let ops = seeded_workload(20, 1).operations;
    let expected = replay(&ops);
    let verdict = verify(&expected, &expected[..19]);
    assert!(!verdict.passed());
    assert_eq!(verdict.actual_count, 19);
}

#[test]
fn stream_text_round_trips_through_oracle_output() {
    let workload = seeded_workload(300, 77);
    let text = workload.encode().unwrap();
    let output = run_oracle(&text).unwrap();
    assert_eq!(decode_results(&output).unwrap(), replay(&workload.operations));
    assert_eq!(decode_stream(&text).unwrap(), workload.operations);
}

#[test]
fn seed_reproduces_stream_text() {
    let a = seeded_workload(400, 9).encode().unwrap();
    let b = stream_of(&seeded_workload(400, 9).operations);
    assert_eq!(a, b);
}

#[test]
fn marker_spelled_value_scores_against_itself() {
    let stream = "3\n2 k -ERROR-\n1 k\n1 missing\n";
    let output = run_oracle(stream).unwrap();
    assert_eq!(output, "3\n-SUCCESS-\n-ERROR-\n-ERROR-\n");

    let ops = decode_stream(stream).unwrap();
    let verdict = verify(&replay(&ops), &decode_results(&output).unwrap());
    assert!(verdict.passed(), "{}", verdict);
}
