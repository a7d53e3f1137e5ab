use std::collections::{BTreeMap, BTreeSet};

use tranquil_core::models::dass21::{Dass21Subscale, SeverityBand};
use tranquil_instruments::error::ScoringError;
use tranquil_instruments::instruments::dass21::{self, ITEM_COUNT};
use tranquil_instruments::{classify_subscale, collect_responses, compute_assessment};

use Dass21Subscale::{Anxiety, Depression, Stress};
use SeverityBand::{ExtremelySevere, Mild, Moderate, Normal, Severe};

const DEPRESSION_ITEMS: [u8; 7] = [3, 5, 10, 13, 16, 17, 21];
const ANXIETY_ITEMS: [u8; 7] = [2, 4, 7, 9, 15, 19, 20];
const STRESS_ITEMS: [u8; 7] = [1, 6, 8, 11, 12, 14, 18];

fn at() -> jiff::Timestamp {
    jiff::Timestamp::from_second(1_700_000_000).unwrap()
}

fn uniform(value: u8) -> BTreeMap<u8, u8> {
    (1..=ITEM_COUNT).map(|item| (item, value)).collect()
}

#[test]
fn partition_matches_published_item_lists() {
    assert_eq!(dass21::subscale_items(Depression), DEPRESSION_ITEMS);
    assert_eq!(dass21::subscale_items(Anxiety), ANXIETY_ITEMS);
    assert_eq!(dass21::subscale_items(Stress), STRESS_ITEMS);

    let union: BTreeSet<u8> = Dass21Subscale::ALL
        .iter()
        .flat_map(|&s| dass21::subscale_items(s))
        .collect();
    assert_eq!(union, (1..=21).collect::<BTreeSet<u8>>());
    let total: usize = Dass21Subscale::ALL
        .iter()
        .map(|&s| dass21::subscale_items(s).len())
        .sum();
    assert_eq!(total, 21, "subscales must not overlap");
}

#[test]
fn item_table_is_in_administration_order() {
    for (index, item) in dass21::ITEMS.iter().enumerate() {
        assert_eq!(usize::from(item.number), index + 1);
    }
    assert_eq!(dass21::subscale_of(0), None);
    assert_eq!(dass21::subscale_of(22), None);
}

#[test]
fn depression_boundaries() {
    let cases = [
        (0, Normal),
        (9, Normal),
        (10, Mild),
        (13, Mild),
        (14, Moderate),
        (18, Moderate),
        (20, Moderate),
        (21, Severe),
        (27, Severe),
        (28, ExtremelySevere),
        (42, ExtremelySevere),
    ];
    for (score, band) in cases {
        assert_eq!(classify_subscale(Depression, score), band, "depression {score}");
    }
}

#[test]
fn anxiety_boundaries() {
    let cases = [
        (0, Normal),
        (7, Normal),
        (8, Mild),
        (9, Mild),
        (10, Moderate),
        (14, Moderate),
        (15, Severe),
        (16, Severe),
        (19, Severe),
        (20, ExtremelySevere),
    ];
    for (score, band) in cases {
        assert_eq!(classify_subscale(Anxiety, score), band, "anxiety {score}");
    }
}

#[test]
fn stress_boundaries() {
    let cases = [
        (0, Normal),
        (14, Normal),
        (15, Mild),
        (18, Mild),
        (19, Moderate),
        (25, Moderate),
        (26, Severe),
        (28, Severe),
        (30, Severe),
        (33, Severe),
        (34, ExtremelySevere),
    ];
    for (score, band) in cases {
        assert_eq!(classify_subscale(Stress, score), band, "stress {score}");
    }
}

#[test]
fn classification_is_total_beyond_instrument_maximum() {
    for subscale in Dass21Subscale::ALL {
        assert_eq!(classify_subscale(subscale, 43), ExtremelySevere);
        assert_eq!(classify_subscale(subscale, u32::MAX), ExtremelySevere);
    }
}

#[test]
fn all_zero_responses() {
    let result = compute_assessment(&uniform(0), at()).unwrap();
    for sub in result.subscales() {
        assert_eq!(sub.raw_sum, 0);
        assert_eq!(sub.score, 0);
        assert_eq!(sub.severity, Normal);
    }
    assert_eq!(result.grand_total, 0);
}

#[test]
fn all_maximum_responses() {
    let result = compute_assessment(&uniform(3), at()).unwrap();
    for sub in result.subscales() {
        assert_eq!(sub.raw_sum, 21);
        assert_eq!(sub.score, 42);
        assert_eq!(sub.severity, ExtremelySevere);
    }
    assert_eq!(result.grand_total, 126);
}

#[test]
fn depression_items_only() {
    let mut responses = uniform(0);
    for item in DEPRESSION_ITEMS {
        responses.insert(item, 3);
    }

    let result = compute_assessment(&responses, at()).unwrap();
    assert_eq!(result.depression.score, 42);
    assert_eq!(result.depression.severity, ExtremelySevere);
    assert_eq!(result.anxiety.score, 0);
    assert_eq!(result.anxiety.severity, Normal);
    assert_eq!(result.stress.score, 0);
    assert_eq!(result.stress.severity, Normal);
    assert_eq!(result.grand_total, 42);
}

#[test]
fn mixed_responses_land_on_their_subscales() {
    // Stress items 1 and 6 answered 2, anxiety item 2 answered 1.
    let mut responses = uniform(0);
    responses.insert(1, 2);
    responses.insert(6, 2);
    responses.insert(2, 1);

    let result = compute_assessment(&responses, at()).unwrap();
    assert_eq!(result.stress.raw_sum, 4);
    assert_eq!(result.stress.score, 8);
    assert_eq!(result.stress.severity, Normal);
    assert_eq!(result.anxiety.score, 2);
    assert_eq!(result.depression.score, 0);
    assert_eq!(result.grand_total, 10);
}

#[test]
fn scoring_is_idempotent_and_timestamp_is_metadata() {
    let responses: BTreeMap<u8, u8> = (1..=ITEM_COUNT).map(|i| (i, i % 4)).collect();

    let a = compute_assessment(&responses, at()).unwrap();
    let b = compute_assessment(&responses, at()).unwrap();
    assert_eq!(a, b);

    let later = jiff::Timestamp::from_second(1_800_000_000).unwrap();
    let c = compute_assessment(&responses, later).unwrap();
    assert_eq!(c.assessed_at, later);
    assert_eq!(
        (c.depression, c.anxiety, c.stress, c.grand_total),
        (a.depression, a.anxiety, a.stress, a.grand_total)
    );
}

#[test]
fn scores_stay_in_range_and_total_is_sum() {
    // Walk a spread of response patterns, one per offset.
    for offset in 0..16u8 {
        let responses: BTreeMap<u8, u8> = (1..=ITEM_COUNT)
            .map(|i| (i, i.wrapping_mul(offset).wrapping_add(offset) % 4))
            .collect();
        let result = compute_assessment(&responses, at()).unwrap();

        for sub in result.subscales() {
            assert!(sub.score <= 42);
            assert_eq!(sub.score, sub.raw_sum * 2);
            assert_eq!(sub.severity, classify_subscale(sub.subscale, sub.score));
        }
        assert!(result.grand_total <= 126);
        assert_eq!(
            result.grand_total,
            result.depression.score + result.anxiety.score + result.stress.score
        );
    }
}

#[test]
fn twenty_items_is_incomplete() {
    let mut responses = uniform(1);
    responses.remove(&17);

    let err = compute_assessment(&responses, at()).unwrap_err();
    assert_eq!(err, ScoringError::IncompleteResponseSet { missing: vec![17] });
}

#[test]
fn empty_response_set_lists_every_item() {
    let err = compute_assessment(&BTreeMap::new(), at()).unwrap_err();
    let ScoringError::IncompleteResponseSet { missing } = &err else {
        panic!("expected IncompleteResponseSet, got {err:?}");
    };
    assert_eq!(*missing, (1..=21).collect::<Vec<u8>>());
}

#[test]
fn out_of_range_value_is_rejected_not_clamped() {
    let mut responses = uniform(0);
    responses.insert(9, 4);

    let err = compute_assessment(&responses, at()).unwrap_err();
    assert_eq!(err, ScoringError::InvalidResponseValue { item: 9, value: 4 });
}

#[test]
fn invalid_value_reported_even_when_incomplete() {
    let responses = BTreeMap::from([(1, 7)]);
    let err = compute_assessment(&responses, at()).unwrap_err();
    assert_eq!(err, ScoringError::InvalidResponseValue { item: 1, value: 7 });
}

#[test]
fn unknown_item_number_is_rejected() {
    let mut responses = uniform(0);
    responses.insert(22, 1);

    let err = compute_assessment(&responses, at()).unwrap_err();
    assert_eq!(err, ScoringError::UnknownItem(22));
}

fn wire(value: i64) -> Vec<(i64, i64)> {
    (1..=21).map(|item| (item, value)).collect()
}

#[test]
fn collected_wire_entries_score_like_a_map() {
    let responses = collect_responses(wire(2)).unwrap();
    assert_eq!(responses, uniform(2));
    assert_eq!(compute_assessment(&responses, at()).unwrap().grand_total, 84);
}

#[test]
fn repeated_item_is_rejected() {
    let mut entries = wire(3);
    entries.push((1, 0));

    assert_eq!(
        collect_responses(entries),
        Err(ScoringError::DuplicateItem(1))
    );
}

#[test]
fn wire_values_outside_a_byte_are_invalid_not_truncated() {
    let mut entries = wire(0);
    entries[4] = (5, -1);
    assert_eq!(
        collect_responses(entries),
        Err(ScoringError::InvalidResponseValue { item: 5, value: -1 })
    );

    let mut entries = wire(0);
    entries[4] = (5, 256);
    assert_eq!(
        collect_responses(entries),
        Err(ScoringError::InvalidResponseValue { item: 5, value: 256 })
    );
}

#[test]
fn wire_item_numbers_outside_the_table_are_unknown() {
    for item in [0, -3, 22, 300] {
        assert_eq!(
            collect_responses([(item, 1)]),
            Err(ScoringError::UnknownItem(item))
        );
    }
}

#[test]
fn collecting_does_not_check_completeness() {
    let responses = collect_responses([(1, 1), (2, 2)]).unwrap();
    assert_eq!(responses, BTreeMap::from([(1, 1), (2, 2)]));
    assert!(matches!(
        compute_assessment(&responses, at()),
        Err(ScoringError::IncompleteResponseSet { .. })
    ));
}
