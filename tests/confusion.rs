use maskbench::metrics::confusion::ConfusionCounts;

#[test]
fn counts_always_sum_to_vector_length() {
    let reference = [1, 0, 1, 1, 0, 0, 1, 0];
    let predicted = [1, 1, 0, 1, 0, 1, 0, 0];
    let counts = ConfusionCounts::from_vectors(&reference, &predicted).unwrap();
    assert_eq!(counts.total(), reference.len() as u64);
    assert_eq!(counts.true_pos, 2);
    assert_eq!(counts.true_neg, 2);
    assert_eq!(counts.false_pos, 2);
    assert_eq!(counts.false_neg, 2);
}

#[test]
fn length_mismatch_is_rejected() {
    assert!(ConfusionCounts::from_vectors(&[1, 0], &[1]).is_err());
}

#[test]
fn defined_metrics_stay_in_unit_range() {
    let reference = [1, 1, 0, 0, 1, 0, 1, 1];
    let predicted = [1, 0, 0, 1, 1, 0, 0, 1];
    let counts = ConfusionCounts::from_vectors(&reference, &predicted).unwrap();
    for metric in [
        counts.accuracy(),
        counts.sensitivity(),
        counts.specificity(),
        counts.ppv(),
        counts.npv(),
        counts.f1(),
        counts.jaccard(),
    ] {
        let v = metric.unwrap();
        assert!((0.0..=1.0).contains(&v), "metric out of range: {v}");
    }
}

#[test]
fn perfect_all_white_match() {
    // Two frames of a 2x2 all-white mask against an identical candidate.
    let reference = [1u8; 8];
    let predicted = [1u8; 8];
    let counts = ConfusionCounts::from_vectors(&reference, &predicted).unwrap();

    assert_eq!(counts.accuracy(), Some(1.0));
    assert_eq!(counts.sensitivity(), Some(1.0));
    // No negatives present anywhere: specificity is undefined, not zero.
    assert_eq!(counts.specificity(), None);
    assert_eq!(counts.npv(), None);
    assert_eq!(counts.jaccard(), Some(1.0));
    assert_eq!(counts.f1(), Some(1.0));
}

#[test]
fn all_black_candidate_against_all_white_reference() {
    let reference = [1u8; 8];
    let predicted = [0u8; 8];
    let counts = ConfusionCounts::from_vectors(&reference, &predicted).unwrap();

    assert_eq!(counts.accuracy(), Some(0.0));
    assert_eq!(counts.sensitivity(), Some(0.0));
    // No positive predictions: PPV undefined, and F1 undefined through it.
    assert_eq!(counts.ppv(), None);
    assert_eq!(counts.f1(), None);
    assert_eq!(counts.jaccard(), Some(0.0));
}

#[test]
fn jaccard_matches_count_formula() {
    let reference = [1, 1, 1, 0, 0, 0, 1, 0];
    let predicted = [1, 0, 1, 1, 0, 0, 0, 0];
    let counts = ConfusionCounts::from_vectors(&reference, &predicted).unwrap();
    let expected = counts.true_pos as f64
        / (counts.true_pos + counts.false_pos + counts.false_neg) as f64;
    assert_eq!(counts.jaccard(), Some(expected));
    assert_eq!(counts.jaccard(), Some(0.4));
}

#[test]
fn f1_undefined_when_no_true_positives_on_either_side() {
    // tp = 0 with both positive predictions and positive references present:
    // PPV and sensitivity are both 0, so F1 divides zero by zero.
    let reference = [1, 1, 0, 0];
    let predicted = [0, 0, 1, 1];
    let counts = ConfusionCounts::from_vectors(&reference, &predicted).unwrap();
    assert_eq!(counts.ppv(), Some(0.0));
    assert_eq!(counts.sensitivity(), Some(0.0));
    assert_eq!(counts.f1(), None);
}
